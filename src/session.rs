use std::collections::BTreeSet;

use crate::error::TheoryError;
use crate::exercises::curriculum::Challenge;
use crate::exercises::drill::{DrillSession, Target};
use crate::keyboard::Keyboard;
use crate::theory::analyzer::{analyze, Analysis};
use crate::theory::note::{midi_to_note, Midi};

/// A loaded challenge paired with its drill state.
#[derive(Clone, Debug)]
struct ActiveDrill {
    challenge: Challenge,
    drill: DrillSession,
}

/// One practice session: the held-pitch set plus an optional drill.
/// The event-dispatch layer owns exactly one of these and threads every
/// note event through it; all transitions are synchronous, so replaying
/// an event log always reproduces the same state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    keyboard: Keyboard,
    active: Option<ActiveDrill>,
}

impl Session {
    pub fn new() -> Session {
        Session {
            keyboard: Keyboard::new(),
            active: None,
        }
    }

    /// Handle a note-on event. Returns true when the pitch was newly
    /// pressed; only then is the drill evaluated, so a duplicate press
    /// can never double-trigger a transition.
    pub fn note_on(&mut self, midi: Midi) -> bool {
        if !self.keyboard.note_on(midi) {
            return false;
        }
        if let Some(active) = &mut self.active {
            active.drill.note_on(midi, self.keyboard.held());
        }
        true
    }

    /// Handle a note-off event. Never evaluates the drill.
    pub fn note_off(&mut self, midi: Midi) -> bool {
        self.keyboard.note_off(midi)
    }

    /// Load a challenge, normalizing it to a target up front. A bad
    /// record is rejected here and the previous drill stays untouched.
    pub fn start_drill(&mut self, challenge: Challenge) -> Result<(), TheoryError> {
        let target = Target::from_challenge(&challenge)?;
        let drill = DrillSession::new(target)?;
        self.active = Some(ActiveDrill { challenge, drill });
        Ok(())
    }

    /// Back to free play. Held keys keep sounding; matching state is
    /// simply discarded.
    pub fn clear_drill(&mut self) {
        self.active = None;
    }

    pub fn has_drill(&self) -> bool {
        self.active.is_some()
    }

    pub fn drill_completed(&self) -> bool {
        self.active
            .as_ref()
            .map(|active| active.drill.completed())
            .unwrap_or(false)
    }

    /// Pitches the learner must press next; empty without a drill.
    pub fn hint(&self) -> Vec<Midi> {
        self.active
            .as_ref()
            .map(|active| active.drill.hint())
            .unwrap_or_default()
    }

    /// Current target as note names for the staff renderer.
    pub fn target_names(&self) -> Vec<String> {
        self.active
            .as_ref()
            .map(|active| {
                active
                    .drill
                    .expected_notes()
                    .iter()
                    .map(|&midi| midi_to_note(midi))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn instruction(&self) -> Option<&str> {
        self.active
            .as_ref()
            .map(|active| active.challenge.instruction.as_str())
    }

    pub fn context(&self) -> Option<&str> {
        self.active
            .as_ref()
            .and_then(|active| active.challenge.context.as_deref())
    }

    /// Live analysis of whatever is held right now.
    pub fn analysis(&self) -> Analysis {
        analyze(self.keyboard.held())
    }

    /// Held pitches as ascending note names.
    pub fn held_notes(&self) -> Vec<String> {
        self.keyboard.note_names()
    }

    pub fn held(&self) -> &BTreeSet<Midi> {
        self.keyboard.held()
    }
}
