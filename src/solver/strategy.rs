//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{LetterStatus, compare_names};
use rustc_hash::FxHashMap;

/// A strategy for picking the next name among the remaining candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &[&'a str]) -> Option<&'a str>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    /// Maximise the number of distinct feedback rows (default)
    Spread(SpreadStrategy),
    /// Always take the first candidate alphabetically
    First(FirstStrategy),
    /// Pick uniformly at random
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        match self {
            Self::Spread(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "spread", "first", "random".
    /// Defaults to spread if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First(FirstStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Spread(SpreadStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Spread(_) => "spread",
            Self::First(_) => "first",
            Self::Random(_) => "random",
        }
    }
}

/// Pick the candidate that splits the others into the most feedback groups
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadStrategy;

impl Strategy for SpreadStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        // Ties resolve to the earliest candidate
        candidates
            .iter()
            .enumerate()
            .max_by_key(|&(i, guess)| (partition_count(guess, candidates), std::cmp::Reverse(i)))
            .map(|(_, guess)| *guess)
    }
}

/// Number of distinct feedback rows `guess` would produce across `candidates`
#[must_use]
pub fn partition_count(guess: &str, candidates: &[&str]) -> usize {
    let mut groups: FxHashMap<Vec<LetterStatus>, usize> = FxHashMap::default();
    for answer in candidates {
        let row = compare_names(guess, answer).into_iter().map(|f| f.status).collect();
        *groups.entry(row).or_insert(0) += 1;
    }
    groups.len()
}

/// First candidate in pool order
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates.first().copied()
    }
}

/// Random candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 4] = ["KROOS", "MENDY", "NESTA", "PIRLO"];

    #[test]
    fn from_name_defaults_to_spread() {
        assert_eq!(StrategyType::from_name("first").name(), "first");
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("spread").name(), "spread");
        assert_eq!(StrategyType::from_name("nonsense").name(), "spread");
    }

    #[test]
    fn empty_candidates_yield_none() {
        for strategy in ["spread", "first", "random"].map(StrategyType::from_name) {
            assert!(strategy.select_guess(&[]).is_none());
        }
    }

    #[test]
    fn first_strategy_takes_first() {
        assert_eq!(FirstStrategy.select_guess(&NAMES), Some("KROOS"));
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        for _ in 0..20 {
            let pick = RandomStrategy.select_guess(&NAMES).unwrap();
            assert!(NAMES.contains(&pick));
        }
    }

    #[test]
    fn partition_count_of_unique_names() {
        // Every name scores itself all-correct and differs from the rest
        assert_eq!(partition_count("KROOS", &NAMES), 4);
        assert_eq!(partition_count("KROOS", &["KROOS"]), 1);
    }

    #[test]
    fn spread_prefers_informative_guess() {
        // ABCDE cannot tell the other two apart; VWXYZ separates all three
        let candidates = ["ABCDE", "VWXYZ", "VWXYQ"];
        assert_eq!(partition_count("ABCDE", &candidates), 2);
        assert_eq!(partition_count("VWXYZ", &candidates), 3);
        assert_eq!(SpreadStrategy.select_guess(&candidates), Some("VWXYZ"));
    }

    #[test]
    fn spread_ties_go_to_earliest() {
        assert_eq!(SpreadStrategy.select_guess(&NAMES), Some("KROOS"));
    }
}
