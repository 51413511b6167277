//! Name guesser driven by a strategy

use super::strategy::Strategy;
use crate::core::{NameGuess, compare_names};

/// Suggests names for a single position
///
/// Keeps a borrowed pool of known names and narrows it down with the feedback
/// of previous guesses on the same position.
pub struct Guesser<'a, S: Strategy> {
    strategy: S,
    pool: &'a [String],
}

impl<'a, S: Strategy> Guesser<'a, S> {
    /// Create a guesser over `pool` (upper-case names)
    pub const fn new(strategy: S, pool: &'a [String]) -> Self {
        Self { strategy, pool }
    }

    /// Next name to try for an answer of `len` characters
    ///
    /// Names already guessed are never suggested again. Returns `None` once
    /// nothing in the pool is consistent with `history`.
    pub fn next_guess(&self, len: usize, history: &[NameGuess]) -> Option<&'a str> {
        let candidates: Vec<&'a str> = self
            .filter_candidates(len, history)
            .into_iter()
            .filter(|name| history.iter().all(|g| g.guess_name() != *name))
            .collect();

        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.strategy.select_guess(&candidates),
        }
    }

    /// Pool names of length `len` that would have produced every row in `history`
    pub fn filter_candidates(&self, len: usize, history: &[NameGuess]) -> Vec<&'a str> {
        self.pool
            .iter()
            .map(String::as_str)
            .filter(|name| name.chars().count() == len)
            .filter(|name| {
                history.iter().all(|guess| {
                    compare_names(guess.guess_name(), name)
                        .into_iter()
                        .map(|l| l.status)
                        .eq(guess.statuses())
                })
            })
            .collect()
    }

    pub fn count_candidates(&self, len: usize, history: &[NameGuess]) -> usize {
        self.filter_candidates(len, history).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{FirstStrategy, SpreadStrategy};

    fn pool() -> Vec<String> {
        ["KROOS", "MENDY", "NESTA", "PIRLO", "MODRIC", "KAKA"]
            .map(String::from)
            .to_vec()
    }

    #[test]
    fn length_filters_the_pool() {
        let pool = pool();
        let guesser = Guesser::new(FirstStrategy, &pool);
        assert_eq!(guesser.count_candidates(5, &[]), 4);
        assert_eq!(guesser.filter_candidates(6, &[]), vec!["MODRIC"]);
        assert_eq!(guesser.count_candidates(9, &[]), 0);
    }

    #[test]
    fn feedback_narrows_candidates() {
        let pool = pool();
        let guesser = Guesser::new(FirstStrategy, &pool);

        let history = [NameGuess::evaluate("KROOS", "NESTA")];
        assert_eq!(guesser.filter_candidates(5, &history), vec!["NESTA"]);
        assert_eq!(guesser.next_guess(5, &history), Some("NESTA"));
    }

    #[test]
    fn already_guessed_names_are_skipped() {
        let pool = pool();
        let guesser = Guesser::new(FirstStrategy, &pool);

        // A solved row keeps only the guess itself, which is then excluded
        let history = [NameGuess::evaluate("KROOS", "KROOS")];
        assert_eq!(guesser.count_candidates(5, &history), 1);
        assert!(guesser.next_guess(5, &history).is_none());
    }

    #[test]
    fn inconsistent_history_yields_none() {
        let pool = pool();
        let guesser = Guesser::new(SpreadStrategy, &pool);

        // No pool name scores these statuses against ZZZZZ
        let history = [NameGuess::evaluate("ZZZZZ", "ZZZZZ")];
        assert_eq!(guesser.count_candidates(5, &history), 0);
        assert!(guesser.next_guess(5, &history).is_none());
    }

    #[test]
    fn guesser_finds_every_answer() {
        let pool = pool();
        let guesser = Guesser::new(SpreadStrategy, &pool);

        for answer in &pool {
            let len = answer.chars().count();
            let mut history = Vec::new();
            while let Some(name) = guesser.next_guess(len, &history) {
                let guess = NameGuess::evaluate(name, answer);
                let done = guess.is_correct();
                history.push(guess);
                if done {
                    break;
                }
            }
            assert!(history.last().is_some_and(NameGuess::is_correct), "{answer}");
        }
    }
}
