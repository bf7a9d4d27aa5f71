use std::collections::BTreeSet;

use crate::error::TheoryError;
use crate::exercises::curriculum::{Challenge, ChallengeKind};
use crate::exercises::generators::spell_chord;
use crate::theory::note::{note_to_midi, Midi};

/// What the learner has to play, fixed at challenge load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Hold exactly this set of pitches at once.
    Chord(BTreeSet<Midi>),
    /// Play these pitches one at a time, in order.
    Sequence(Vec<Midi>),
    /// Match each chord in turn.
    ChordChain(Vec<BTreeSet<Midi>>),
}

impl Target {
    /// Normalize a challenge record into a target. Interval and triad
    /// records both become chords; chord-sequence becomes a chain. All
    /// parsing and validation happens here, never at match time.
    pub fn from_challenge(challenge: &Challenge) -> Result<Target, TheoryError> {
        match &challenge.kind {
            ChallengeKind::Interval { root, semitones } => {
                let root_midi = note_to_midi(root)?;
                Ok(Target::Chord(
                    [root_midi, root_midi + semitones].into_iter().collect(),
                ))
            }
            ChallengeKind::Triad { root, formula } => {
                let notes = spell_chord(root, formula)?;
                Ok(Target::Chord(parse_chord(&notes)?))
            }
            ChallengeKind::Sequence { notes } => {
                if notes.is_empty() {
                    return Err(TheoryError::DataError("sequence has no notes".to_string()));
                }
                let midis = notes
                    .iter()
                    .map(|n| note_to_midi(n))
                    .collect::<Result<Vec<Midi>, TheoryError>>()?;
                Ok(Target::Sequence(midis))
            }
            ChallengeKind::ChordSequence { chords } => {
                if chords.is_empty() {
                    return Err(TheoryError::DataError(
                        "chord sequence has no chords".to_string(),
                    ));
                }
                let sets = chords
                    .iter()
                    .map(|c| parse_chord(c))
                    .collect::<Result<Vec<BTreeSet<Midi>>, TheoryError>>()?;
                Ok(Target::ChordChain(sets))
            }
        }
    }
}

fn parse_chord<S: AsRef<str>>(notes: &[S]) -> Result<BTreeSet<Midi>, TheoryError> {
    if notes.is_empty() {
        return Err(TheoryError::DataError("chord has no notes".to_string()));
    }
    notes.iter().map(|n| note_to_midi(n.as_ref())).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillState {
    Loaded,
    InProgress,
    Completed,
}

/// One drill attempt. Created when a challenge loads, replaced wholesale
/// when the next one loads; `Completed` is terminal until then.
#[derive(Clone, Debug)]
pub struct DrillSession {
    target: Target,
    progress: usize,
    state: DrillState,
}

impl DrillSession {
    pub fn new(target: Target) -> Result<DrillSession, TheoryError> {
        let well_formed = match &target {
            Target::Chord(notes) => !notes.is_empty(),
            Target::Sequence(notes) => !notes.is_empty(),
            Target::ChordChain(chords) => {
                !chords.is_empty() && chords.iter().all(|c| !c.is_empty())
            }
        };
        if !well_formed {
            return Err(TheoryError::DataError("target has no notes".to_string()));
        }
        Ok(DrillSession {
            target,
            progress: 0,
            state: DrillState::Loaded,
        })
    }

    pub fn state(&self) -> DrillState {
        self.state
    }

    pub fn completed(&self) -> bool {
        self.state == DrillState::Completed
    }

    /// Chain or sequence cursor; 0 for a plain chord until completion.
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Evaluate one note-on event against the target. `held` is the full
    /// set of currently sounding pitches, `midi` the key just pressed.
    /// Note-off events are never evaluated.
    pub fn note_on(&mut self, midi: Midi, held: &BTreeSet<Midi>) {
        if self.state == DrillState::Completed {
            return;
        }
        self.state = DrillState::InProgress;
        match &self.target {
            Target::Chord(notes) => {
                // Exact set equality: extra held notes block the match.
                if held == notes {
                    self.state = DrillState::Completed;
                }
            }
            Target::Sequence(notes) => {
                // Wrong presses are ignored; the cursor never regresses.
                if notes[self.progress] == midi {
                    self.progress += 1;
                    if self.progress == notes.len() {
                        self.state = DrillState::Completed;
                    }
                }
            }
            Target::ChordChain(chords) => {
                if held == &chords[self.progress] {
                    self.progress += 1;
                    if self.progress == chords.len() {
                        self.state = DrillState::Completed;
                    }
                }
            }
        }
    }

    /// The pitches the learner must press next. Pure read.
    pub fn hint(&self) -> Vec<Midi> {
        if self.completed() {
            return Vec::new();
        }
        match &self.target {
            Target::Chord(notes) => notes.iter().copied().collect(),
            Target::Sequence(notes) => vec![notes[self.progress]],
            Target::ChordChain(chords) => chords[self.progress].iter().copied().collect(),
        }
    }

    /// The staff-display form of the current target: the whole chord or
    /// sequence, or the active chord of a chain.
    pub fn expected_notes(&self) -> Vec<Midi> {
        match &self.target {
            Target::Chord(notes) => notes.iter().copied().collect(),
            Target::Sequence(notes) => notes.clone(),
            Target::ChordChain(chords) => {
                let index = self.progress.min(chords.len() - 1);
                chords[index].iter().copied().collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(midis: &[Midi]) -> BTreeSet<Midi> {
        midis.iter().copied().collect()
    }

    fn chord_target(midis: &[Midi]) -> Target {
        Target::Chord(held(midis))
    }

    fn challenge(kind: ChallengeKind) -> Challenge {
        Challenge {
            kind,
            instruction: "test".to_string(),
            context: None,
        }
    }

    #[test]
    fn test_chord_requires_exact_set() {
        let mut drill = DrillSession::new(chord_target(&[60, 64, 67])).unwrap();

        // Superset: an extra passing tone blocks completion.
        drill.note_on(71, &held(&[60, 64, 67, 71]));
        assert!(!drill.completed());

        // Subset: not enough notes yet.
        drill.note_on(64, &held(&[60, 64]));
        assert!(!drill.completed());

        drill.note_on(67, &held(&[60, 64, 67]));
        assert!(drill.completed());
    }

    #[test]
    fn test_sequence_ignores_wrong_presses() {
        let mut drill = DrillSession::new(Target::Sequence(vec![60, 62, 64])).unwrap();

        drill.note_on(60, &held(&[60]));
        assert_eq!(drill.progress(), 1);

        // Wrong note: no regression, no failure.
        drill.note_on(65, &held(&[65]));
        assert_eq!(drill.progress(), 1);
        assert!(!drill.completed());

        drill.note_on(62, &held(&[62]));
        assert_eq!(drill.progress(), 2);

        drill.note_on(64, &held(&[64]));
        assert!(drill.completed());
    }

    #[test]
    fn test_chain_advances_without_completing() {
        let chords = vec![held(&[60, 64, 67]), held(&[65, 69, 72])];
        let mut drill = DrillSession::new(Target::ChordChain(chords)).unwrap();

        drill.note_on(67, &held(&[60, 64, 67]));
        assert!(!drill.completed());
        assert_eq!(drill.progress(), 1);
        assert_eq!(drill.hint(), vec![65, 69, 72]);

        drill.note_on(72, &held(&[65, 69, 72]));
        assert!(drill.completed());
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut drill = DrillSession::new(chord_target(&[60])).unwrap();
        drill.note_on(60, &held(&[60]));
        assert!(drill.completed());

        // Further events change nothing.
        drill.note_on(62, &held(&[62]));
        assert!(drill.completed());
        assert!(drill.hint().is_empty());
    }

    #[test]
    fn test_state_machine_walk() {
        let mut drill = DrillSession::new(Target::Sequence(vec![60, 62])).unwrap();
        assert_eq!(drill.state(), DrillState::Loaded);

        drill.note_on(59, &held(&[59]));
        assert_eq!(drill.state(), DrillState::InProgress);

        drill.note_on(60, &held(&[60]));
        drill.note_on(62, &held(&[62]));
        assert_eq!(drill.state(), DrillState::Completed);
    }

    #[test]
    fn test_sequence_hint_is_single_next_pitch() {
        let mut drill = DrillSession::new(Target::Sequence(vec![60, 62, 64])).unwrap();
        assert_eq!(drill.hint(), vec![60]);
        drill.note_on(60, &held(&[60]));
        assert_eq!(drill.hint(), vec![62]);
    }

    #[test]
    fn test_interval_normalizes_to_chord() {
        let ch = challenge(ChallengeKind::Interval {
            root: "C4".to_string(),
            semitones: 4,
        });
        assert_eq!(Target::from_challenge(&ch).unwrap(), chord_target(&[60, 64]));
    }

    #[test]
    fn test_triad_normalizes_to_chord() {
        let ch = challenge(ChallengeKind::Triad {
            root: "A3".to_string(),
            formula: "min".to_string(),
        });
        assert_eq!(
            Target::from_challenge(&ch).unwrap(),
            chord_target(&[57, 60, 64])
        );
    }

    #[test]
    fn test_chord_sequence_normalizes_to_chain() {
        let ch = challenge(ChallengeKind::ChordSequence {
            chords: vec![
                vec!["C4".to_string(), "E4".to_string(), "G4".to_string()],
                vec!["F4".to_string(), "A4".to_string(), "C5".to_string()],
            ],
        });
        let target = Target::from_challenge(&ch).unwrap();
        assert_eq!(
            target,
            Target::ChordChain(vec![held(&[60, 64, 67]), held(&[65, 69, 72])])
        );
    }

    #[test]
    fn test_load_failures_are_data_errors() {
        let empty_seq = challenge(ChallengeKind::Sequence { notes: vec![] });
        assert!(matches!(
            Target::from_challenge(&empty_seq),
            Err(TheoryError::DataError(_))
        ));

        let empty_chain = challenge(ChallengeKind::ChordSequence { chords: vec![] });
        assert!(matches!(
            Target::from_challenge(&empty_chain),
            Err(TheoryError::DataError(_))
        ));

        let hollow_chain = challenge(ChallengeKind::ChordSequence {
            chords: vec![vec![]],
        });
        assert!(matches!(
            Target::from_challenge(&hollow_chain),
            Err(TheoryError::DataError(_))
        ));

        let bad_formula = challenge(ChallengeKind::Triad {
            root: "C4".to_string(),
            formula: "maj42".to_string(),
        });
        assert!(matches!(
            Target::from_challenge(&bad_formula),
            Err(TheoryError::DataError(_))
        ));
    }

    #[test]
    fn test_bad_note_names_fail_at_load() {
        let ch = challenge(ChallengeKind::Sequence {
            notes: vec!["C4".to_string(), "H4".to_string()],
        });
        assert!(matches!(
            Target::from_challenge(&ch),
            Err(TheoryError::ParseError(_))
        ));
    }

    #[test]
    fn test_expected_notes_track_chain_cursor() {
        let chords = vec![held(&[60, 64, 67]), held(&[65, 69, 72])];
        let mut drill = DrillSession::new(Target::ChordChain(chords)).unwrap();
        assert_eq!(drill.expected_notes(), vec![60, 64, 67]);

        drill.note_on(67, &held(&[60, 64, 67]));
        assert_eq!(drill.expected_notes(), vec![65, 69, 72]);
    }
}
