//! Core domain types for name guessing
//!
//! This module contains the comparator and guess types with no knowledge of
//! matches, formations or game progress.

mod feedback;
mod name;

pub use feedback::{GuessLetter, LetterStatus, NameGuess, compare_names};
pub use name::{GuessInput, InputError, is_name_char};
