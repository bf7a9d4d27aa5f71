use crate::error::TheoryError;
use crate::exercises::generators::spell;

/// Shell voicing: strictly drop the root and fifth of a stacked-tertian
/// chord, keeping the 3rd and 7th (indices 1 and 3 of [1, 3, 5, 7]).
pub fn shell(chord: &[String]) -> Vec<String> {
    let mut voicing = Vec::new();
    if let Some(third) = chord.get(1) {
        voicing.push(third.clone());
    }
    if let Some(seventh) = chord.get(3) {
        voicing.push(seventh.clone());
    }
    voicing
}

/// Dominant 13th voicing: LH root and 7th, RH 3rd, 13th, 7th, 9th.
pub fn herbie_hancock(root: &str) -> Result<Vec<String>, TheoryError> {
    spell(root, &[0, 10, 16, 17, 22, 26])
}

/// Quartal minor 11th voicing: stacked 4ths with a major 3rd on top.
pub fn so_what(root: &str) -> Result<Vec<String>, TheoryError> {
    spell(root, &[0, 5, 10, 15, 19])
}

/// Open minor 11th voicing: root, 5th, 9th, 11th, 7th on top.
pub fn kenny_barron(root: &str) -> Result<Vec<String>, TheoryError> {
    spell(root, &[0, 7, 14, 17, 22])
}

/// The dominant a tritone away, for substitution (G7 -> Db7).
pub fn tritone_substitute(root: &str) -> Result<String, TheoryError> {
    spell(root, &[6]).map(|mut notes| notes.remove(0))
}

/// Dominant 7th with optional alterations: #5 replaces the 5th, and a
/// 9th is always stacked on top, flattened when requested.
pub fn altered_dominant(
    root: &str,
    sharp_five: bool,
    flat_nine: bool,
) -> Result<Vec<String>, TheoryError> {
    let mut offsets = vec![0, 4, 7, 10];
    if sharp_five {
        offsets[2] = 8;
    }
    offsets.push(if flat_nine { 13 } else { 14 });
    spell(root, &offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::generators::spell_chord;

    #[test]
    fn test_shell_keeps_third_and_seventh() {
        let g7 = spell_chord("G3", "dom7").unwrap();
        assert_eq!(shell(&g7), vec!["B3", "F4"]);
    }

    #[test]
    fn test_shell_of_bare_triad() {
        let c = spell_chord("C4", "maj").unwrap();
        assert_eq!(shell(&c), vec!["E4"]);
    }

    #[test]
    fn test_herbie_hancock() {
        assert_eq!(
            herbie_hancock("C3").unwrap(),
            vec!["C3", "A#3", "E4", "F4", "A#4", "D5"]
        );
    }

    #[test]
    fn test_so_what() {
        // Classic Dm11: D, G, C, F, A.
        assert_eq!(
            so_what("D4").unwrap(),
            vec!["D4", "G4", "C5", "F5", "A5"]
        );
    }

    #[test]
    fn test_kenny_barron() {
        assert_eq!(
            kenny_barron("C3").unwrap(),
            vec!["C3", "G3", "D4", "F4", "A#4"]
        );
    }

    #[test]
    fn test_tritone_substitute() {
        assert_eq!(tritone_substitute("G3").unwrap(), "C#4");
        assert_eq!(tritone_substitute("C4").unwrap(), "F#4");
    }

    #[test]
    fn test_altered_dominant() {
        // Plain: 1 3 5 b7 9.
        assert_eq!(
            altered_dominant("G3", false, false).unwrap(),
            vec!["G3", "B3", "D4", "F4", "A4"]
        );
        // #5 replaces the fifth, b9 darkens the top.
        assert_eq!(
            altered_dominant("G3", true, true).unwrap(),
            vec!["G3", "B3", "D#4", "F4", "G#4"]
        );
    }
}
