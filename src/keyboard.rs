use std::collections::BTreeSet;

use crate::theory::note::{midi_to_note, Midi};

/// The set of currently sounding pitches. Sole owner of that state:
/// note-on inserts, note-off removes, membership is all that matters.
#[derive(Clone, Debug, Default)]
pub struct Keyboard {
    held: BTreeSet<Midi>,
}

impl Keyboard {
    pub fn new() -> Keyboard {
        Keyboard {
            held: BTreeSet::new(),
        }
    }

    /// Returns true only when the pitch was newly pressed. Pressing an
    /// already-held key is a no-op, so duplicate events collapse here.
    pub fn note_on(&mut self, midi: Midi) -> bool {
        self.held.insert(midi)
    }

    /// Returns true when the pitch was actually held.
    pub fn note_off(&mut self, midi: Midi) -> bool {
        self.held.remove(&midi)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn held(&self) -> &BTreeSet<Midi> {
        &self.held
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Ascending canonical note names, ready for the staff renderer.
    pub fn note_names(&self) -> Vec<String> {
        self.held.iter().map(|&midi| midi_to_note(midi)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_on_off() {
        let mut keys = Keyboard::new();
        assert!(keys.note_on(60));
        assert!(keys.note_on(64));
        assert_eq!(keys.held().len(), 2);

        assert!(keys.note_off(60));
        assert_eq!(keys.held().len(), 1);
        assert!(!keys.note_off(60));
    }

    #[test]
    fn test_duplicate_press_is_noop() {
        let mut keys = Keyboard::new();
        assert!(keys.note_on(60));
        assert!(!keys.note_on(60));
        assert_eq!(keys.held().len(), 1);
    }

    #[test]
    fn test_names_sorted_ascending() {
        let mut keys = Keyboard::new();
        keys.note_on(67);
        keys.note_on(60);
        keys.note_on(64);
        assert_eq!(keys.note_names(), vec!["C4", "E4", "G4"]);
    }

    #[test]
    fn test_clear() {
        let mut keys = Keyboard::new();
        keys.note_on(60);
        keys.clear();
        assert!(keys.is_empty());
    }
}
