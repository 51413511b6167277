//! Command implementations

pub mod compare;
pub mod matches;
pub mod simple;
pub mod simulate;

pub use compare::{CompareResult, compare_guess};
pub use matches::{MatchSummary, list_matches};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationStats, run_simulation};
