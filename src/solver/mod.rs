//! Automatic name guessing
//!
//! Narrows a pool of known names using the feedback of earlier guesses and
//! picks the next one with a pluggable strategy.

mod engine;
pub mod strategy;

pub use engine::Guesser;
pub use strategy::{FirstStrategy, RandomStrategy, SpreadStrategy, Strategy, StrategyType};
