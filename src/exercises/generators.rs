use crate::error::TheoryError;
use crate::theory::note::{midi_to_note, note_to_midi};

/// Chord formulas as semitone offsets from the root.
pub const CHORD_FORMULAS: [(&str, &[i32]); 13] = [
    ("maj", &[0, 4, 7]),
    ("min", &[0, 3, 7]),
    ("dim", &[0, 3, 6]),
    ("aug", &[0, 4, 8]),
    ("sus4", &[0, 5, 7]),
    ("sus2", &[0, 2, 7]),
    ("maj6", &[0, 4, 7, 9]),
    ("min6", &[0, 3, 7, 9]),
    ("maj7", &[0, 4, 7, 11]),
    ("min7", &[0, 3, 7, 10]),
    ("dom7", &[0, 4, 7, 10]),
    ("m7b5", &[0, 3, 6, 10]),
    ("dim7", &[0, 3, 6, 9]),
];

/// Scale and mode patterns as semitone offsets from the root.
pub const MODES: [(&str, &[i32]); 17] = [
    ("Ionian", &[0, 2, 4, 5, 7, 9, 11]),
    ("Dorian", &[0, 2, 3, 5, 7, 9, 10]),
    ("Phrygian", &[0, 1, 3, 5, 7, 8, 10]),
    ("Lydian", &[0, 2, 4, 6, 7, 9, 11]),
    ("Mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
    ("Aeolian", &[0, 2, 3, 5, 7, 8, 10]),
    ("Locrian", &[0, 1, 3, 5, 6, 8, 10]),
    ("HarmonicMinor", &[0, 2, 3, 5, 7, 8, 11]),
    ("MelodicMinor", &[0, 2, 3, 5, 7, 9, 11]),
    ("PentMajor", &[0, 2, 4, 7, 9]),
    ("PentMinor", &[0, 3, 5, 7, 10]),
    ("Blues", &[0, 3, 5, 6, 7, 10]),
    ("WholeTone", &[0, 2, 4, 6, 8, 10]),
    ("DiminishedHW", &[0, 1, 3, 4, 6, 7, 9, 10]),
    ("DoubleHarmonicMaj", &[0, 1, 4, 5, 7, 8, 11]),
    ("Sadness", &[0, 1, 3, 6, 7, 8, 11]),
    ("Chromatic", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]),
];

pub fn chord_formula(name: &str) -> Option<&'static [i32]> {
    CHORD_FORMULAS
        .iter()
        .find(|(formula, _)| *formula == name)
        .map(|(_, offsets)| *offsets)
}

pub fn mode_pattern(name: &str) -> Option<&'static [i32]> {
    MODES
        .iter()
        .find(|(mode, _)| *mode == name)
        .map(|(_, offsets)| *offsets)
}

/// Spell a pattern of semitone offsets upward from a root note name.
/// Octave wrap falls out of the MIDI arithmetic.
pub fn spell(root: &str, offsets: &[i32]) -> Result<Vec<String>, TheoryError> {
    let root_midi = note_to_midi(root)?;
    Ok(offsets
        .iter()
        .map(|&offset| midi_to_note(root_midi + offset))
        .collect())
}

/// Spell a named chord from a root, e.g. ("G3", "dom7") -> G3 B3 D4 F4.
pub fn spell_chord(root: &str, formula: &str) -> Result<Vec<String>, TheoryError> {
    let offsets = chord_formula(formula)
        .ok_or_else(|| TheoryError::DataError(format!("unknown chord formula: {}", formula)))?;
    spell(root, offsets)
}

/// Spell a named scale or mode from a root.
pub fn spell_scale(root: &str, mode: &str) -> Result<Vec<String>, TheoryError> {
    let offsets = mode_pattern(mode)
        .ok_or_else(|| TheoryError::DataError(format!("unknown mode: {}", mode)))?;
    spell(root, offsets)
}
