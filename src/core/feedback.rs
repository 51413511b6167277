//! Letter-by-letter feedback for a guessed player name
//!
//! Every guessed character is scored against the hidden name:
//! - Correct = same letter at the same index
//! - Present = letter occurs elsewhere in the name (and is not already used up)
//! - Absent = letter does not occur, or all of its occurrences were credited already

use rustc_hash::FxHashMap;
use std::fmt;

/// Score of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(label)
    }
}

/// One scored letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessLetter {
    pub letter: char,
    pub status: LetterStatus,
}

impl GuessLetter {
    #[must_use]
    pub const fn new(letter: char, status: LetterStatus) -> Self {
        Self { letter, status }
    }
}

/// Compare a guessed name against the answer
///
/// Both names are upper-cased (ASCII) before comparison. The result has one
/// entry per character of `guess`; indices past the end of `answer` are
/// scored absent. Length checking is the caller's job.
///
/// # Algorithm
/// 1. Count every letter of the answer
/// 2. First pass: mark exact matches and remove them from the count
/// 3. Second pass: mark remaining letters present while the count allows it
///
/// # Examples
/// ```
/// use lineup_wordle::core::{LetterStatus, compare_names};
///
/// let feedback = compare_names("docirm", "MODRIC");
/// assert_eq!(feedback[1].status, LetterStatus::Correct);
/// assert!(feedback.iter().all(|f| f.status != LetterStatus::Absent));
/// ```
#[must_use]
pub fn compare_names(guess: &str, answer: &str) -> Vec<GuessLetter> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let answer: Vec<char> = answer.chars().map(|c| c.to_ascii_uppercase()).collect();

    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in &answer {
        *available.entry(ch).or_insert(0) += 1;
    }

    let mut statuses: Vec<Option<LetterStatus>> = vec![None; guess.len()];

    // First pass: exact positions consume the budget before anything else
    for (i, &letter) in guess.iter().enumerate() {
        if answer.get(i) == Some(&letter) {
            statuses[i] = Some(LetterStatus::Correct);
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, credited at most once per occurrence
    for (i, &letter) in guess.iter().enumerate() {
        if statuses[i].is_some() {
            continue;
        }
        let status = match available.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                LetterStatus::Present
            }
            _ => LetterStatus::Absent,
        };
        statuses[i] = Some(status);
    }

    guess
        .into_iter()
        .zip(statuses)
        .map(|(letter, status)| GuessLetter::new(letter, status.unwrap_or(LetterStatus::Absent)))
        .collect()
}

/// A submitted attempt at a position's name
///
/// Immutable once built: the name is stored upper-cased alongside its feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGuess {
    guess_name: String,
    feedback: Vec<GuessLetter>,
}

impl NameGuess {
    /// Build a guess from an already computed feedback row
    #[must_use]
    pub fn new(guess_name: impl Into<String>, feedback: Vec<GuessLetter>) -> Self {
        Self {
            guess_name: guess_name.into(),
            feedback,
        }
    }

    /// Score `guess` against `answer` and keep the result
    #[must_use]
    pub fn evaluate(guess: &str, answer: &str) -> Self {
        let feedback = compare_names(guess, answer);
        Self {
            guess_name: guess.to_ascii_uppercase(),
            feedback,
        }
    }

    #[inline]
    #[must_use]
    pub fn guess_name(&self) -> &str {
        &self.guess_name
    }

    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[GuessLetter] {
        &self.feedback
    }

    /// True when every letter is in the right place
    #[must_use]
    pub fn is_correct(&self) -> bool {
        !self.feedback.is_empty()
            && self
                .feedback
                .iter()
                .all(|f| f.status == LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.feedback.iter().filter(|f| f.status == status).count()
    }

    /// Feedback as emoji tiles, e.g. "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.feedback.iter().map(|f| f.status.emoji()).collect()
    }

    /// Status sequence only, for comparing feedback rows regardless of letters
    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.feedback.iter().map(|f| f.status).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn statuses(guess: &str, answer: &str) -> Vec<LetterStatus> {
        compare_names(guess, answer).iter().map(|f| f.status).collect()
    }

    #[test]
    fn identical_names_are_all_correct() {
        for name in ["MODRIC", "BENZEMA", "EDER MILITAO", "RUI COSTA", "AAAAA"] {
            assert!(statuses(name, name).iter().all(|&s| s == Correct));
        }
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert!(statuses("modric", "MODRIC").iter().all(|&s| s == Correct));
        let feedback = compare_names("Modric", "mODRIC");
        assert_eq!(feedback[0].letter, 'M');
        assert_eq!(feedback[5].letter, 'C');
    }

    #[test]
    fn anagram_scores_present_except_fixed_letter() {
        assert_eq!(
            statuses("DOCIRM", "MODRIC"),
            vec![Present, Correct, Present, Present, Present, Present]
        );
    }

    #[test]
    fn letters_missing_from_answer_are_absent() {
        let feedback = compare_names("TROMTA", "MODRIC");
        for f in &feedback {
            if f.letter == 'T' || f.letter == 'A' {
                assert_eq!(f.status, Absent, "{} should be absent", f.letter);
            }
        }
        assert_eq!(
            statuses("TROMTA", "MODRIC"),
            vec![Absent, Present, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_guess_letters_credited_once() {
        // MENDY has a single E
        assert_eq!(
            statuses("EEEEE", "MENDY"),
            vec![Absent, Correct, Absent, Absent, Absent]
        );
        // Exact match consumes the budget before an earlier misplaced copy
        assert_eq!(
            statuses("YYNDY", "MENDY"),
            vec![Absent, Absent, Correct, Correct, Correct]
        );
    }

    #[test]
    fn duplicate_answer_letters_allow_multiple_credits() {
        // KROOS has two O's at indices 2 and 3
        assert_eq!(
            statuses("OOKRS", "KROOS"),
            vec![Present, Present, Present, Present, Correct]
        );
    }

    #[test]
    fn longer_guess_tail_is_absent() {
        let feedback = compare_names("ALABAS", "ALABA");
        assert_eq!(feedback.len(), 6);
        assert_eq!(feedback[5].status, Absent);
        assert!(feedback[..5].iter().all(|f| f.status == Correct));
    }

    #[test]
    fn shorter_guess_follows_guess_length() {
        assert_eq!(statuses("ALA", "ALABA"), vec![Correct, Correct, Correct]);
    }

    #[test]
    fn spaces_compare_like_letters() {
        let feedback = compare_names("RUI COSTA", "RUI COSTA");
        assert_eq!(feedback[3].letter, ' ');
        assert_eq!(feedback[3].status, Correct);
        assert_eq!(statuses("RUICOSTA ", "RUI COSTA")[8], Present);
    }

    #[test]
    fn empty_inputs() {
        assert!(compare_names("", "MODRIC").is_empty());
        assert_eq!(statuses("AB", ""), vec![Absent, Absent]);
    }

    #[test]
    fn name_guess_evaluate_upper_cases_and_scores() {
        let guess = NameGuess::evaluate("kroos", "KROOS");
        assert_eq!(guess.guess_name(), "KROOS");
        assert!(guess.is_correct());
        assert_eq!(guess.count_correct(), 5);
        assert_eq!(guess.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn name_guess_partial_is_not_correct() {
        let guess = NameGuess::evaluate("DOCIRM", "MODRIC");
        assert!(!guess.is_correct());
        assert_eq!(guess.count_correct(), 1);
        assert_eq!(guess.count_present(), 5);
        assert_eq!(guess.to_emoji(), "🟨🟩🟨🟨🟨🟨");
    }

    #[test]
    fn empty_feedback_is_never_correct() {
        assert!(!NameGuess::new("", Vec::new()).is_correct());
    }

    #[test]
    fn statuses_follow_feedback_order() {
        let guess = NameGuess::evaluate("TROMTA", "MODRIC");
        assert_eq!(guess.statuses(), vec![Absent, Present, Present, Present, Absent, Absent]);
    }

    #[test]
    fn status_display() {
        assert_eq!(Correct.to_string(), "correct");
        assert_eq!(Present.to_string(), "present");
        assert_eq!(Absent.to_string(), "absent");
    }
}
