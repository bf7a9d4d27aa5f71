use std::collections::BTreeSet;

use serde::Serialize;

use crate::theory::note::{midi_to_note, pitch_class_name, Midi};

/// Interval labels indexed by semitone distance. Index 12 is reserved for
/// a nonzero distance that is an exact multiple of an octave.
pub const INTERVAL_NAMES: [&str; 13] = [
    "Perfect Unison",
    "Minor 2nd",
    "Major 2nd",
    "Minor 3rd",
    "Major 3rd",
    "Perfect 4th",
    "Tritone",
    "Perfect 5th",
    "Minor 6th",
    "Major 6th",
    "Minor 7th",
    "Major 7th",
    "Perfect Octave",
];

/// Sorted, deduplicated nonzero interval classes above the lowest pitch,
/// mapped to a quality label. The table is intentionally not exhaustive:
/// shapes that don't match verbatim simply get no chord name.
const CHORD_PATTERNS: [(&[i32], &str); 13] = [
    (&[4, 7], "Maj"),
    (&[3, 7], "min"),
    (&[3, 6], "dim"),
    (&[4, 8], "aug"),
    (&[2, 7], "sus2"),
    (&[5, 7], "sus4"),
    (&[4, 7, 9], "Maj6"),
    (&[3, 7, 9], "min6"),
    (&[4, 7, 11], "Maj7"),
    (&[3, 7, 10], "min7"),
    (&[4, 7, 10], "dom7"),
    (&[3, 6, 10], "m7b5"),
    (&[3, 6, 9], "dim7"),
];

/// What the UI shows for the currently held notes.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// Pitch class of the lowest sounding note, or "-" when nothing is held.
    pub root: String,
    /// One "<note> (<interval>)" entry per held note, ascending, root first.
    pub intervals: Vec<String>,
    /// Chord name like "C Maj", when the shape matches a known pattern.
    pub chord: Option<String>,
}

impl Analysis {
    fn silence() -> Self {
        Analysis {
            root: "-".to_string(),
            intervals: Vec::new(),
            chord: None,
        }
    }
}

fn interval_name(distance: i32) -> &'static str {
    debug_assert!(distance >= 0);
    if distance != 0 && distance % 12 == 0 {
        INTERVAL_NAMES[12]
    } else {
        INTERVAL_NAMES[(distance % 12) as usize]
    }
}

fn chord_quality(classes: &[i32]) -> Option<&'static str> {
    CHORD_PATTERNS
        .iter()
        .find(|(pattern, _)| *pattern == classes)
        .map(|(_, quality)| *quality)
}

/// Analyze a set of held pitches: lowest pitch is the root, every note is
/// labeled by its distance from the root, and the reduced interval shape
/// is looked up as a chord. Pure; depends only on set membership.
pub fn analyze(held: &BTreeSet<Midi>) -> Analysis {
    let root = match held.iter().next() {
        Some(&lowest) => lowest,
        None => return Analysis::silence(),
    };

    let intervals = held
        .iter()
        .map(|&midi| format!("{} ({})", midi_to_note(midi), interval_name(midi - root)))
        .collect();

    // Octave doublings collapse to 0 under mod 12 and drop out of the key.
    let classes: Vec<i32> = held
        .iter()
        .map(|&midi| (midi - root).rem_euclid(12))
        .filter(|&class| class != 0)
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect();

    let chord = chord_quality(&classes)
        .map(|quality| format!("{} {}", pitch_class_name(root), quality));

    Analysis {
        root: pitch_class_name(root).to_string(),
        intervals,
        chord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(midis: &[Midi]) -> BTreeSet<Midi> {
        midis.iter().copied().collect()
    }

    #[test]
    fn test_empty_is_silence() {
        let analysis = analyze(&BTreeSet::new());
        assert_eq!(analysis.root, "-");
        assert!(analysis.intervals.is_empty());
        assert!(analysis.chord.is_none());
    }

    #[test]
    fn test_single_note() {
        let analysis = analyze(&held(&[60]));
        assert_eq!(analysis.root, "C");
        assert_eq!(analysis.intervals, vec!["C4 (Perfect Unison)"]);
        assert!(analysis.chord.is_none());
    }

    #[test]
    fn test_interval_labels_ascend_from_root() {
        let analysis = analyze(&held(&[60, 64, 67]));
        assert_eq!(
            analysis.intervals,
            vec!["C4 (Perfect Unison)", "E4 (Major 3rd)", "G4 (Perfect 5th)"]
        );
    }

    #[test]
    fn test_order_independence() {
        assert_eq!(analyze(&held(&[60, 64, 67])), analyze(&held(&[67, 60, 64])));
    }

    #[test]
    fn test_triad_labels() {
        assert_eq!(analyze(&held(&[60, 64, 67])).chord.unwrap(), "C Maj");
        assert_eq!(analyze(&held(&[60, 63, 67])).chord.unwrap(), "C min");
        assert_eq!(analyze(&held(&[60, 64, 68])).chord.unwrap(), "C aug");
        assert_eq!(analyze(&held(&[59, 62, 65])).chord.unwrap(), "B dim");
        assert_eq!(analyze(&held(&[62, 67, 69])).chord.unwrap(), "D sus4");
    }

    #[test]
    fn test_seventh_chords() {
        assert_eq!(analyze(&held(&[60, 64, 67, 71])).chord.unwrap(), "C Maj7");
        assert_eq!(analyze(&held(&[62, 65, 69, 72])).chord.unwrap(), "D min7");
        assert_eq!(analyze(&held(&[55, 59, 62, 65])).chord.unwrap(), "G dom7");
    }

    #[test]
    fn test_root_follows_lowest_pitch() {
        // First-inversion C major: the bass note is reported as root, so
        // the {3,8} shape gets no chord name. No inversion detection.
        let analysis = analyze(&held(&[64, 67, 72]));
        assert_eq!(analysis.root, "E");
        assert!(analysis.chord.is_none());
    }

    #[test]
    fn test_octave_doubling_keeps_chord_name() {
        // C4-E4-G4-C5: the doubled root reduces to 0 and vanishes.
        assert_eq!(analyze(&held(&[60, 64, 67, 72])).chord.unwrap(), "C Maj");
    }

    #[test]
    fn test_octave_interval_label() {
        let analysis = analyze(&held(&[53, 65]));
        assert_eq!(
            analysis.intervals,
            vec!["F3 (Perfect Unison)", "F4 (Perfect Octave)"]
        );
        assert!(analysis.chord.is_none());
    }

    #[test]
    fn test_unknown_shape_has_no_label() {
        // Cluster chord: defined "no name" outcome, not an error.
        let analysis = analyze(&held(&[60, 61, 62]));
        assert!(analysis.chord.is_none());
        assert_eq!(analysis.intervals.len(), 3);
    }

    #[test]
    fn test_compound_intervals_reduce() {
        // C3 + E5: major 3rd plus two octaves still reads as a major 3rd.
        let analysis = analyze(&held(&[48, 76]));
        assert_eq!(analysis.intervals[1], "E5 (Major 3rd)");
    }
}
