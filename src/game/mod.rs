//! Game session state
//!
//! `GameStore` owns the match catalog and the current `GameState`; views act
//! on it through the `GameActions` trait and read `GameState` snapshots.

mod state;
mod store;
mod turn;

pub use state::{GameState, GameStatus, MAX_LIVES, PositionState};
pub use store::{GameActions, GameStore, StoreConfig, StoreError};
pub use turn::GuessError;
