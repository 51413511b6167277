//! Lineup Wordle
//!
//! Guess the starting eleven of a historic match, one player name per
//! position, with Wordle-style letter feedback and a fixed number of lives
//! per position.
//!
//! # Quick Start
//!
//! ```rust
//! use lineup_wordle::game::{GameStore, StoreConfig};
//! use lineup_wordle::lineup::{PositionId, loader::embedded_catalog};
//!
//! let catalog = embedded_catalog().unwrap();
//! let mut store = GameStore::new(catalog, StoreConfig::new()).unwrap();
//!
//! let guess = store.submit_guess(PositionId::St, "benzema").unwrap();
//! println!("{}", guess.to_emoji());
//! assert!(store.state().position(PositionId::St).unwrap().is_solved());
//! ```

// Name comparison and guess validation
pub mod core;

// Formations and match catalog
pub mod lineup;

// Game state and store
pub mod game;

// Automatic guessing
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
