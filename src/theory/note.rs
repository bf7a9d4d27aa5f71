use crate::error::TheoryError;

/// Absolute pitch in MIDI numbering: middle C = 60, A4 = 69.
pub type Midi = i32;

/// Canonical spellings for the twelve pitch classes, sharps only.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings resolve to their sharp equivalent before indexing.
/// Substitution happens within the written octave, so Cb4 indexes as B4.
const FLAT_EQUIVALENTS: [(&str, &str); 7] = [
    ("Cb", "B"),
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Fb", "E"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

fn pitch_class_index(spelled: &str) -> Option<i32> {
    let sharp = FLAT_EQUIVALENTS
        .iter()
        .find(|(flat, _)| *flat == spelled)
        .map(|(_, sharp)| *sharp)
        .unwrap_or(spelled);
    NOTE_NAMES.iter().position(|n| *n == sharp).map(|i| i as i32)
}

/// Parse a note name like "C4", "F#3", or "Bb5" into a MIDI number.
pub fn note_to_midi(name: &str) -> Result<Midi, TheoryError> {
    let name = name.trim();
    let mut chars = name.chars();
    let letter = chars
        .next()
        .ok_or_else(|| TheoryError::ParseError("empty note name".to_string()))?;
    let rest = chars.as_str();

    if !('A'..='G').contains(&letter) {
        return Err(TheoryError::ParseError(name.to_string()));
    }
    let (spelled, octave_str) = if rest.starts_with('#') || rest.starts_with('b') {
        (&name[..2], &rest[1..])
    } else {
        (&name[..1], rest)
    };
    let class = pitch_class_index(spelled)
        .ok_or_else(|| TheoryError::ParseError(name.to_string()))?;
    let octave: i32 = octave_str
        .parse()
        .map_err(|_| TheoryError::ParseError(name.to_string()))?;

    Ok((octave + 1) * 12 + class)
}

/// Canonical (sharp-based) name for a MIDI number.
pub fn midi_to_note(midi: Midi) -> String {
    let class = NOTE_NAMES[midi.rem_euclid(12) as usize];
    let octave = midi.div_euclid(12) - 1;
    format!("{}{}", class, octave)
}

/// Octave-stripped pitch-class spelling.
pub fn pitch_class_name(midi: Midi) -> &'static str {
    NOTE_NAMES[midi.rem_euclid(12) as usize]
}

/// Equal-tempered frequency, A4 = 440 Hz.
pub fn midi_to_hz(midi: Midi) -> f64 {
    440.0 * 2f64.powf((midi - 69) as f64 / 12.0)
}
