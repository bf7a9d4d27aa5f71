use serde::{Deserialize, Serialize};

/// The four wire shapes a challenge record can take. Interval and triad
/// describe one chord to hold; sequence is played a note at a time;
/// chord-sequence is a progression of chords matched in order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChallengeKind {
    Interval { root: String, semitones: i32 },
    Triad { root: String, formula: String },
    Sequence { notes: Vec<String> },
    ChordSequence { chords: Vec<Vec<String>> },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Challenge {
    #[serde(flatten)]
    pub kind: ChallengeKind,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct Topic {
    pub name: String,
    pub description: String,
    pub challenges: Vec<Challenge>,
}

#[derive(Serialize, Clone, Debug)]
pub struct CurriculumSection {
    pub name: String,
    pub topics: Vec<Topic>,
}

fn interval(root: &str, semitones: i32, instruction: &str, context: &str) -> Challenge {
    Challenge {
        kind: ChallengeKind::Interval {
            root: root.to_string(),
            semitones,
        },
        instruction: instruction.to_string(),
        context: Some(context.to_string()),
    }
}

fn triad(root: &str, formula: &str, instruction: &str, context: &str) -> Challenge {
    Challenge {
        kind: ChallengeKind::Triad {
            root: root.to_string(),
            formula: formula.to_string(),
        },
        instruction: instruction.to_string(),
        context: Some(context.to_string()),
    }
}

fn sequence(notes: &[&str], instruction: &str, context: &str) -> Challenge {
    Challenge {
        kind: ChallengeKind::Sequence {
            notes: notes.iter().map(|n| n.to_string()).collect(),
        },
        instruction: instruction.to_string(),
        context: Some(context.to_string()),
    }
}

fn chord_sequence(chords: &[&[&str]], instruction: &str, context: &str) -> Challenge {
    Challenge {
        kind: ChallengeKind::ChordSequence {
            chords: chords
                .iter()
                .map(|c| c.iter().map(|n| n.to_string()).collect())
                .collect(),
        },
        instruction: instruction.to_string(),
        context: Some(context.to_string()),
    }
}

fn topic(name: &str, description: &str, challenges: Vec<Challenge>) -> Topic {
    Topic {
        name: name.to_string(),
        description: description.to_string(),
        challenges,
    }
}

/// The built-in two-path curriculum. Hosts can supply their own records;
/// this table mirrors the course the app ships with.
pub fn get_curriculum() -> Vec<CurriculumSection> {
    vec![
        CurriculumSection {
            name: "Beginner".to_string(),
            topics: beginner_topics(),
        },
        CurriculumSection {
            name: "Advanced".to_string(),
            topics: advanced_topics(),
        },
    ]
}

/// Look a topic up by name across both sections.
pub fn find_topic(name: &str) -> Option<Topic> {
    get_curriculum()
        .into_iter()
        .flat_map(|section| section.topics)
        .find(|topic| topic.name == name)
}

fn beginner_topics() -> Vec<Topic> {
    vec![
        topic(
            "Intervals",
            "The distance between notes. Half Step = 1 key. Whole Step = 2 keys.",
            vec![
                interval("C4", 1, "Play a Half Step Up from C", "The smallest interval. 'Jaws' Theme."),
                interval("C4", 2, "Play a Whole Step Up from C", "Standard major scale step. 'Happy Birthday'."),
                interval("E4", 1, "Play a Half Step (E to F)", "Natural half step (no black key between E and F)."),
                interval("C4", 7, "Play C Perfect 5th", "Power. 'Star Wars'."),
                interval("B3", 6, "Play B Tritone", "Devil. 'The Simpsons'."),
                interval("F3", 12, "Play F Octave", "Leap. 'Over the Rainbow'."),
            ],
        ),
        topic(
            "Diatonic Scales",
            "The 'White Keys' scale. All notes from C to C with no sharps or flats.",
            vec![
                sequence(
                    &["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"],
                    "Play the C Major Diatonic Scale",
                    "The 'White Keys' scale. Do-Re-Mi...",
                ),
                sequence(
                    &["G3", "A3", "B3", "C4", "D4", "E4", "F#4", "G4"],
                    "Play the G Major Scale (1 Sharp)",
                    "Classic classical key. Note the F#.",
                ),
                sequence(
                    &["F3", "G3", "A3", "Bb3", "C4", "D4", "E4", "F4"],
                    "Play the F Major Scale (1 Flat)",
                    "Common key for brass instruments.",
                ),
            ],
        ),
        topic(
            "Chromatic Scale",
            "Every single note in order (12 tones). All the sharps and flats included.",
            vec![
                sequence(
                    &["C4", "C#4", "D4", "D#4", "E4", "F4"],
                    "Play C Chromatic (Ascending)",
                    "Every half step. 'Flight of the Bumblebee'.",
                ),
                sequence(
                    &["G4", "F#4", "F4", "E4", "Eb4", "D4"],
                    "Play G Chromatic (Descending)",
                    "Used in glissandos and runs.",
                ),
            ],
        ),
        topic(
            "Major & Minor Scales",
            "The two main moods of music. Major = Happy. Minor = Sad.",
            vec![
                sequence(
                    &["A3", "B3", "C4", "D4", "E4", "F4", "G4", "A4"],
                    "Play A Natural Minor Scale",
                    "Sad, serious. Same notes as C Major.",
                ),
                sequence(
                    &["A3", "B3", "C4", "D4", "E4", "F4", "G#4", "A4"],
                    "Play A Harmonic Minor (Sharp 7)",
                    "Classical/Latin flavor. Note the G#.",
                ),
                sequence(
                    &["C4", "Eb4", "F4", "G4", "Bb4", "C5"],
                    "Play C Minor Pentatonic",
                    "The 'Rock/Blues' scale. Essential for solos.",
                ),
            ],
        ),
        topic(
            "Major & Minor Triads",
            "3-note chords. Major (1-3-5) is happy. Minor (1-b3-5) is sad.",
            vec![
                triad("C4", "maj", "Play C Major Triad (1-3-5)", "Happy. 'Let It Be' (Beatles)."),
                triad("C4", "min", "Play C Minor Triad (1-b3-5)", "Sad. 'Eye of the Tiger' (Survivor)."),
                triad("F3", "maj", "Play F Major Triad", "Bright and open. 'Free Fallin' uses this."),
                triad("A3", "min", "Play A Minor Triad", "Serious. 'Stairway to Heaven'."),
            ],
        ),
        topic(
            "Augmented & Diminished Triads",
            "Augmented: Sharp the 5th (1-3-#5). Diminished: Flat the 3rd and 5th (1-b3-b5).",
            vec![
                triad("C4", "aug", "Play C Augmented (1-3-#5)", "Dreamy/Unsettled. 'Life on Mars' (Bowie) pre-chorus."),
                triad("B3", "dim", "Play B Diminished (1-b3-b5)", "Tense. Pulls strongly to C Major."),
                triad("F4", "aug", "Play F Augmented", "Floating feeling. Used in intros."),
            ],
        ),
        topic(
            "Suspended Chords",
            "Replace the 3rd with a 2nd (Sus2) or 4th (Sus4). Sounds open and floating.",
            vec![
                triad("D4", "sus4", "Play D Sus4 (1-4-5)", "Rock: 'Pinball Wizard' (The Who)."),
                triad("D4", "sus2", "Play D Sus2 (1-2-5)", "Ballad: 'Summer of 69' (Bryan Adams)."),
                triad("A3", "sus4", "Play A Sus4", "Pop: 'Jack & Diane' intro."),
            ],
        ),
        topic(
            "6th Chords",
            "Add the 6th note to a triad. C6 = C-E-G-A. Sounds pastoral and sweet.",
            vec![
                triad("C4", "maj6", "Play C Major 6 (1-3-5-6)", "Swing/Jazz. The ending chord of 'She Loves You' (Beatles)."),
                triad("C4", "min6", "Play C Minor 6 (1-b3-5-6)", "Spy Theme: 'James Bond' Theme ending chord."),
                triad("G3", "maj6", "Play G Major 6", "Rockabilly/Boogie Woogie bass lines."),
            ],
        ),
        topic(
            "Tetrads (4-Note Chords)",
            "Stacking to the 7th note. Major 7 (1-3-5-7), Minor 7 (1-b3-5-b7), Dominant 7 (1-3-5-b7).",
            vec![
                triad("C4", "maj7", "Play C Major 7 (1-3-5-7)", "Dreamy. 'Imagine' (John Lennon)."),
                triad("D4", "min7", "Play D Minor 7 (1-b3-5-b7)", "Cool. 'Get Down On It' (Kool & The Gang)."),
                triad("G3", "dom7", "Play G Dominant 7 (1-3-5-b7)", "Bluesy. The V chord in C Major."),
            ],
        ),
        topic(
            "Chord Inversions",
            "Rearranging the order of notes (e.g., C-E-G becomes E-G-C). Makes chord changes smoother.",
            vec![
                sequence(
                    &["E4", "G4", "C5"],
                    "Play C Major (1st Inversion)",
                    "3rd in the bass. Smoother voice leading.",
                ),
                sequence(
                    &["G3", "C4", "E4"],
                    "Play C Major (2nd Inversion)",
                    "5th in the bass. Used in gospel 'Amen' endings.",
                ),
                sequence(
                    &["F4", "A4", "D5"],
                    "Play D Minor (1st Inversion)",
                    "Common in pop piano ballads.",
                ),
            ],
        ),
        topic(
            "The Number System",
            "Labeling chords 1-7 (I-VII) to understand their function in any key.",
            vec![
                chord_sequence(
                    &[
                        &["C4", "E4", "G4"],
                        &["F4", "A4", "C5"],
                        &["G4", "B4", "D5"],
                        &["C4", "E4", "G4"],
                    ],
                    "Play I - IV - V - I in C",
                    "The 'Three Chord Trick'. Basis of Rock & Roll.",
                ),
                chord_sequence(
                    &[
                        &["C4", "E4", "G4"],
                        &["A3", "C4", "E4"],
                        &["F3", "A3", "C4"],
                        &["G3", "B3", "D4"],
                    ],
                    "Play I - vi - IV - V in C",
                    "The '50s Progression' (Stand By Me, etc.).",
                ),
                chord_sequence(
                    &[
                        &["D4", "F4", "A4"],
                        &["G3", "B3", "D4", "F4"],
                        &["C4", "E4", "G4"],
                    ],
                    "Play ii - V7 - I in C",
                    "The 'Jazz Progression'.",
                ),
            ],
        ),
    ]
}

fn advanced_topics() -> Vec<Topic> {
    vec![
        topic(
            "Dominants & Tritones",
            "The tension chord (V7). Contains a Tritone that pulls to the root.",
            vec![
                triad("G3", "dom7", "Play G7 (V of C)", "Hear the pull to C? That's the Tritone (B-F)."),
                interval("B3", 6, "Play the Tritone in G7 (B to F)", "The 'Unstable' core of the chord."),
                triad("E4", "dom7", "Play E7 (V of A)", "Resolves to A Major or A Minor."),
            ],
        ),
        topic(
            "Secondary Dominants",
            "A dominant chord that resolves to a chord other than the tonic (e.g., V of V).",
            vec![
                chord_sequence(
                    &[&["A3", "C#4", "E4", "G4"], &["D4", "F4", "A4"]],
                    "Play A7 resolving to D Minor (V of ii)",
                    "Pulls to D Minor. 'Hey Jude' uses this.",
                ),
                chord_sequence(
                    &[&["D4", "F#4", "A4", "C5"], &["G3", "B3", "D4"]],
                    "Play D7 resolving to G (V of V)",
                    "Pulls to G. 'Yesterday' uses this.",
                ),
                chord_sequence(
                    &[&["E4", "G#4", "B4", "D5"], &["A3", "C4", "E4"]],
                    "Play E7 resolving to A Minor (V of vi)",
                    "Pulls to A Minor. 'Creep' (Radiohead) uses III7.",
                ),
            ],
        ),
        topic(
            "Tritone Substitution",
            "Replacing a Dominant 7th with another Dominant 7th exactly 6 semitones away.",
            vec![
                triad("Db4", "dom7", "Play Db7 (Sub for G7)", "Resolves to C. Jazz chromatic bass movement."),
                chord_sequence(
                    &[
                        &["D4", "F4", "A4"],
                        &["Db4", "F4", "Ab4", "B4"],
                        &["C4", "E4", "G4"],
                    ],
                    "Play ii - subV - I (Dm - Db7 - C)",
                    "Smooth chromatic bassline.",
                ),
            ],
        ),
        topic(
            "Jazz Voicings",
            "Advanced ways to arrange notes. Herbie Hancock, Bill Evans, and Kenny Barron styles.",
            vec![
                sequence(
                    &["D4", "G4", "C5", "F5"],
                    "Play Quartal Voicing (Stacked 4ths)",
                    "'So What' voicing. Modern and open.",
                ),
                sequence(
                    &["C4", "E4", "G4", "B4"],
                    "Play Closed Voicing (Cmaj7)",
                    "Tight block chord.",
                ),
                sequence(
                    &["C3", "G3", "E4", "B4"],
                    "Play Open Voicing (Cmaj7)",
                    "Spacious, professional ballad sound.",
                ),
            ],
        ),
    ]
}
