use wasm_bindgen::prelude::*;

pub mod error;
pub mod exercises;
pub mod keyboard;
pub mod session;
pub mod theory;

use std::collections::BTreeSet;

use serde::Serialize;

use error::TheoryError;
use exercises::{curriculum, generators};
use session::Session;
use theory::{analyzer, note, voicing};

fn to_js(err: TheoryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a note name like "C4" or "Bb3" into its MIDI number.
#[wasm_bindgen]
pub fn note_to_midi(name: &str) -> Result<i32, JsValue> {
    note::note_to_midi(name).map_err(to_js)
}

/// Canonical (sharp-based) note name for a MIDI number.
#[wasm_bindgen]
pub fn midi_to_note(midi: i32) -> String {
    note::midi_to_note(midi)
}

/// Equal-tempered frequency in Hz, for the host's oscillators.
#[wasm_bindgen]
pub fn midi_to_hz(midi: i32) -> f64 {
    note::midi_to_hz(midi)
}

/// Analyze a set of held pitches into root, interval labels, and an
/// optional chord name. Duplicates and ordering are irrelevant.
#[wasm_bindgen]
pub fn analyze_notes(midis: Vec<i32>) -> Result<JsValue, JsValue> {
    let held: BTreeSet<i32> = midis.into_iter().collect();
    serialize(&analyzer::analyze(&held))
}

/// The built-in Beginner/Advanced curriculum table.
#[wasm_bindgen]
pub fn get_curriculum() -> Result<JsValue, JsValue> {
    serialize(&curriculum::get_curriculum())
}

/// Spell a named scale or mode from a root, e.g. ("C4", "Dorian").
#[wasm_bindgen]
pub fn spell_scale(root: &str, mode: &str) -> Result<JsValue, JsValue> {
    serialize(&generators::spell_scale(root, mode).map_err(to_js)?)
}

/// Spell a named chord from a root, e.g. ("G3", "dom7").
#[wasm_bindgen]
pub fn spell_chord(root: &str, formula: &str) -> Result<JsValue, JsValue> {
    serialize(&generators::spell_chord(root, formula).map_err(to_js)?)
}

/// Jazz voicing builders, keyed the way the UI buttons are.
#[wasm_bindgen]
pub fn jazz_voicing(kind: &str, root: &str) -> Result<JsValue, JsValue> {
    let notes = match kind {
        "herbie-hancock" => voicing::herbie_hancock(root),
        "so-what" => voicing::so_what(root),
        "kenny-barron" => voicing::kenny_barron(root),
        _ => Err(TheoryError::DataError(format!("unknown voicing: {}", kind))),
    }
    .map_err(to_js)?;
    serialize(&notes)
}

/// Reduce a stacked-tertian chord to its 3rd and 7th.
#[wasm_bindgen]
pub fn shell_voicing(chord: Vec<String>) -> Result<JsValue, JsValue> {
    serialize(&voicing::shell(&chord))
}

/// The dominant root a tritone away (G3 -> C#4).
#[wasm_bindgen]
pub fn tritone_substitute(root: &str) -> Result<String, JsValue> {
    voicing::tritone_substitute(root).map_err(to_js)
}

/// Dominant 7th with optional #5 / b9 alterations, 9th on top.
#[wasm_bindgen]
pub fn altered_dominant(
    root: &str,
    sharp_five: bool,
    flat_nine: bool,
) -> Result<JsValue, JsValue> {
    serialize(&voicing::altered_dominant(root, sharp_five, flat_nine).map_err(to_js)?)
}

/// What the UI needs to present a freshly loaded challenge.
#[derive(Serialize)]
struct ChallengeView {
    instruction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
    notes: Vec<String>,
}

/// The stateful core behind one open tab: held keys plus the active
/// drill. The host constructs one and routes every input event through
/// it; note events, analysis reads, and drill checks all stay in Rust.
#[wasm_bindgen]
pub struct PracticeSession {
    inner: Session,
}

#[wasm_bindgen]
impl PracticeSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PracticeSession {
        PracticeSession {
            inner: Session::new(),
        }
    }

    /// Returns true when the pitch was newly pressed. The drill is only
    /// evaluated in that case, so duplicate note-on events are inert.
    pub fn note_on(&mut self, midi: i32) -> bool {
        self.inner.note_on(midi)
    }

    pub fn note_off(&mut self, midi: i32) -> bool {
        self.inner.note_off(midi)
    }

    /// Held pitches as ascending note names, for the staff renderer.
    pub fn held_notes(&self) -> js_sys::Array {
        self.inner
            .held_notes()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// Live analysis of the held pitch set.
    pub fn analysis(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.analysis())
    }

    /// Load a challenge by topic name and index. Returns the challenge
    /// view, or null once the topic's challenges are exhausted (the UI
    /// shows "Complete!"). Malformed records are rejected here and the
    /// previous drill stays active.
    pub fn load_challenge(&mut self, topic: &str, index: usize) -> Result<JsValue, JsValue> {
        let topic = curriculum::find_topic(topic)
            .ok_or_else(|| to_js(TheoryError::DataError(format!("unknown topic: {}", topic))))?;
        let challenge = match topic.challenges.get(index) {
            Some(challenge) => challenge.clone(),
            None => return Ok(JsValue::NULL),
        };
        self.inner.start_drill(challenge).map_err(to_js)?;
        self.challenge_view()
    }

    /// Load a challenge record supplied by the host instead of the
    /// built-in table. Accepts the same four record shapes
    /// (interval/triad/sequence/chord-sequence).
    pub fn load_challenge_record(&mut self, record: JsValue) -> Result<JsValue, JsValue> {
        let challenge: curriculum::Challenge = serde_wasm_bindgen::from_value(record)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.start_drill(challenge).map_err(to_js)?;
        self.challenge_view()
    }

    /// Back to free play; held keys keep sounding.
    pub fn clear_challenge(&mut self) {
        self.inner.clear_drill();
    }

    /// Observable success flag; the host reveals "next" controls on it.
    pub fn drill_completed(&self) -> bool {
        self.inner.drill_completed()
    }

    /// Pitches to light up as hints: the whole chord, or just the next
    /// pitch of a sequence.
    pub fn hint(&self) -> js_sys::Int32Array {
        js_sys::Int32Array::from(&self.inner.hint()[..])
    }

    /// Current target as note names (the active chord of a chain).
    pub fn target_notes(&self) -> js_sys::Array {
        self.inner
            .target_names()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }
}

impl PracticeSession {
    fn challenge_view(&self) -> Result<JsValue, JsValue> {
        serialize(&ChallengeView {
            instruction: self.inner.instruction().unwrap_or_default().to_string(),
            context: self.inner.context().map(str::to_string),
            notes: self.inner.target_names(),
        })
    }
}

impl Default for PracticeSession {
    fn default() -> Self {
        PracticeSession::new()
    }
}
