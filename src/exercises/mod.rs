pub mod curriculum;
pub mod drill;
pub mod generators;
