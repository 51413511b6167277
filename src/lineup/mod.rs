//! Formations and match reference data
//!
//! Provides the position slots of each formation and the catalog of matches,
//! with a bundled catalog compiled into the binary.

mod catalog;
mod embedded;
mod formation;
pub mod loader;

pub use catalog::{CatalogError, MatchCatalog, MatchSolution, Player, SolutionPlayer};
pub use embedded::MATCHES_JSON;
pub use formation::{Formation, PITCH_COLS, PITCH_ROWS, PositionId, PositionSlot};
