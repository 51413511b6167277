//! Simulate command - automatic play over the whole catalog
//!
//! Every match is played repeatedly by the guesser through a real
//! `GameStore`, so results respect lives, scoring and end-of-game rules.

use crate::game::{GameStore, StoreConfig, StoreError};
use crate::lineup::{MatchCatalog, PositionId};
use crate::solver::{Guesser, Strategy, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Simulation options
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub games_per_match: usize,
    pub max_lives: usize,
    pub strategy: StrategyType,
    pub show_progress: bool,
}

/// Result of one position in one simulated game
#[derive(Debug, Clone)]
pub struct PositionOutcome {
    pub position: PositionId,
    pub answer: String,
    pub guesses: usize,
    pub solved: bool,
}

/// Result of one simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub match_id: u32,
    pub won: bool,
    pub positions: Vec<PositionOutcome>,
}

/// Aggregated simulation results
#[derive(Debug)]
pub struct SimulationStats {
    pub strategy: &'static str,
    pub games_played: usize,
    pub games_won: usize,
    pub positions_solved: usize,
    pub positions_failed: usize,
    /// Guesses needed per solved position
    pub guess_distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    /// Names with the highest average guess count, worst first
    pub hardest_names: Vec<(String, f64)>,
    pub total_time: Duration,
}

impl SimulationStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// Play one game of `match_id` to the end
///
/// Positions are played in lineup order; each keeps guessing until solved or
/// out of lives. A lost position ends the whole game.
///
/// # Errors
/// Returns `StoreError` if `match_id` is not in the catalog or `max_lives` is zero.
pub fn play_game<S: Strategy>(
    catalog: &MatchCatalog,
    guesser: &Guesser<'_, S>,
    match_id: u32,
    max_lives: usize,
) -> Result<GameOutcome, StoreError> {
    let config = StoreConfig {
        max_lives,
        initial_match: Some(match_id),
    };
    let mut store = GameStore::new(catalog.clone(), config)?;
    let lineup: Vec<(PositionId, String)> = store
        .state()
        .current_match()
        .lineup
        .iter()
        .map(|p| (p.position_id, p.name().to_ascii_uppercase()))
        .collect();

    for (position, answer) in &lineup {
        let len = answer.chars().count();
        loop {
            let state = store.state();
            let Some(slot) = state.position(*position) else {
                break;
            };
            if state.is_finished() || !slot.can_guess() {
                break;
            }
            let Some(name) = guesser.next_guess(len, slot.guesses()) else {
                log::warn!("no candidate left for {position} ({answer})");
                break;
            };
            if let Err(e) = store.submit_guess(*position, name) {
                log::warn!("guess {name} for {position} refused: {e}");
                break;
            }
        }
    }

    let state = store.state();
    let positions = lineup
        .into_iter()
        .filter_map(|(position, answer)| {
            state.position(position).map(|slot| PositionOutcome {
                position,
                answer,
                guesses: slot.guesses().len(),
                solved: slot.is_solved(),
            })
        })
        .collect();

    Ok(GameOutcome {
        match_id,
        won: state.is_game_won(),
        positions,
    })
}

/// Play every catalog match `games_per_match` times in parallel
///
/// # Errors
/// Returns `StoreError` if `max_lives` is zero.
pub fn run_simulation(
    catalog: &MatchCatalog,
    config: SimulationConfig,
) -> Result<SimulationStats, StoreError> {
    if config.max_lives == 0 {
        return Err(StoreError::NoLives);
    }

    let pool = catalog.name_pool();
    let guesser = Guesser::new(config.strategy, &pool);
    let jobs: Vec<u32> = catalog
        .all()
        .iter()
        .flat_map(|m| std::iter::repeat_n(m.match_id, config.games_per_match))
        .collect();

    log::info!(
        "simulating {} games with the {} strategy",
        jobs.len(),
        config.strategy.name()
    );

    let pb = if config.show_progress {
        ProgressBar::new(jobs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = jobs
        .par_iter()
        .map(|&match_id| {
            let outcome = play_game(catalog, &guesser, match_id, config.max_lives);
            pb.inc(1);
            outcome
        })
        .collect::<Result<_, _>>()?;
    pb.finish_with_message("Complete!");

    Ok(summarize(config.strategy.name(), &outcomes, start.elapsed()))
}

/// Fold game outcomes into aggregate statistics
#[must_use]
pub fn summarize(
    strategy: &'static str,
    outcomes: &[GameOutcome],
    total_time: Duration,
) -> SimulationStats {
    let mut guess_distribution = BTreeMap::new();
    let mut per_name: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    let mut positions_solved = 0;
    let mut positions_failed = 0;

    for position in outcomes.iter().flat_map(|o| &o.positions) {
        if position.solved {
            positions_solved += 1;
            *guess_distribution.entry(position.guesses).or_insert(0) += 1;
        } else if position.guesses > 0 {
            positions_failed += 1;
        }
        if position.guesses > 0 {
            let entry = per_name.entry(position.answer.as_str()).or_insert((0, 0));
            entry.0 += position.guesses;
            entry.1 += 1;
        }
    }

    let total_guesses: usize = guess_distribution.iter().map(|(g, n)| g * n).sum();
    let average_guesses = if positions_solved > 0 {
        total_guesses as f64 / positions_solved as f64
    } else {
        0.0
    };

    let mut hardest_names: Vec<(String, f64)> = per_name
        .into_iter()
        .map(|(name, (guesses, plays))| (name.to_string(), guesses as f64 / plays as f64))
        .collect();
    hardest_names.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_names.truncate(5);

    SimulationStats {
        strategy,
        games_played: outcomes.len(),
        games_won: outcomes.iter().filter(|o| o.won).count(),
        positions_solved,
        positions_failed,
        guess_distribution,
        average_guesses,
        hardest_names,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::loader::embedded_catalog;
    use crate::solver::FirstStrategy;

    fn config(strategy: &str, max_lives: usize) -> SimulationConfig {
        SimulationConfig {
            games_per_match: 2,
            max_lives,
            strategy: StrategyType::from_name(strategy),
            show_progress: false,
        }
    }

    #[test]
    fn generous_lives_always_win() {
        // Each guess removes at least itself from the pool, so enough lives
        // guarantee every answer is reached
        let catalog = embedded_catalog().unwrap();
        let lives = catalog.name_pool().len();
        let stats = run_simulation(&catalog, config("first", lives)).unwrap();

        assert_eq!(stats.games_played, catalog.len() * 2);
        assert_eq!(stats.games_won, stats.games_played);
        assert!((stats.win_rate() - 100.0).abs() < f64::EPSILON);
        assert_eq!(stats.positions_solved, stats.games_played * 11);
        assert_eq!(stats.positions_failed, 0);
    }

    #[test]
    fn distribution_counts_solved_positions() {
        let catalog = embedded_catalog().unwrap();
        let stats = run_simulation(&catalog, config("spread", 5)).unwrap();

        let counted: usize = stats.guess_distribution.values().sum();
        assert_eq!(counted, stats.positions_solved);
        assert!(stats.guess_distribution.keys().all(|&g| (1..=5).contains(&g)));
        assert!(stats.hardest_names.len() <= 5);
    }

    #[test]
    fn single_life_game_stops_at_first_miss() {
        let catalog = embedded_catalog().unwrap();
        let pool = catalog.name_pool();
        let guesser = Guesser::new(FirstStrategy, &pool);
        let outcome = play_game(&catalog, &guesser, 1, 1).unwrap();

        let missed = outcome.positions.iter().filter(|p| !p.solved && p.guesses > 0);
        assert!(missed.count() <= 1);
        if !outcome.won {
            // Positions after the lost one are never attempted
            let last_played = outcome.positions.iter().rposition(|p| p.guesses > 0).unwrap();
            assert!(!outcome.positions[last_played].solved);
        }
    }

    #[test]
    fn zero_lives_is_an_error() {
        let catalog = embedded_catalog().unwrap();
        assert!(matches!(
            run_simulation(&catalog, config("first", 0)),
            Err(StoreError::NoLives)
        ));
    }

    #[test]
    fn unknown_match_is_an_error() {
        let catalog = embedded_catalog().unwrap();
        let pool = catalog.name_pool();
        let guesser = Guesser::new(FirstStrategy, &pool);
        assert!(play_game(&catalog, &guesser, 99, 5).is_err());
    }
}
