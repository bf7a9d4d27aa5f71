use thiserror::Error;

/// Errors raised by the theory core.
///
/// Both variants are local failures: they reject the offending note name
/// or challenge record and leave session state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// A note name does not match `<Letter A-G>[#|b]<octave>`.
    #[error("unparseable note name: {0}")]
    ParseError(String),

    /// A challenge record is structurally invalid (empty note list,
    /// unknown chord formula, and so on). Raised at load time, never
    /// during matching.
    #[error("invalid challenge: {0}")]
    DataError(String),
}
