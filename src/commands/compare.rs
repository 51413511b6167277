//! Compare command
//!
//! Scores one guessed name against one answer outside of any game.

use crate::core::NameGuess;

/// Outcome of a single comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareResult {
    pub answer: String,
    pub guess: NameGuess,
    /// Guess and answer differ in length; the tail is scored absent
    pub length_mismatch: bool,
}

/// Score `guess` against `answer`
///
/// Both sides are trimmed and upper-cased. Unlike a game turn, a length
/// mismatch is reported rather than refused.
#[must_use]
pub fn compare_guess(guess: &str, answer: &str) -> CompareResult {
    let answer = answer.trim().to_ascii_uppercase();
    let guess = NameGuess::evaluate(guess.trim(), &answer);
    let length_mismatch = guess.guess_name().chars().count() != answer.chars().count();

    CompareResult {
        answer,
        guess,
        length_mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    #[test]
    fn compare_normalises_both_sides() {
        let result = compare_guess("  docirm ", "Modric");
        assert_eq!(result.answer, "MODRIC");
        assert_eq!(result.guess.guess_name(), "DOCIRM");
        assert!(!result.length_mismatch);
        assert_eq!(result.guess.count_correct(), 1);
        assert_eq!(result.guess.count_present(), 5);
    }

    #[test]
    fn compare_flags_length_mismatch() {
        let result = compare_guess("KROOSS", "KROOS");
        assert!(result.length_mismatch);
        assert_eq!(result.guess.feedback()[5].status, LetterStatus::Absent);
    }

    #[test]
    fn exact_guess_is_correct() {
        assert!(compare_guess("benzema", "BENZEMA").guess.is_correct());
    }
}
