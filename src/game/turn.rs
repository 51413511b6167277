//! Turning raw player input into a recorded guess
//!
//! Mirrors what a view does on submit: check the slot can still be played,
//! validate the text against the answer length, score it, then record it.

use super::store::{GameActions, GameStore};
use crate::core::{GuessInput, InputError, NameGuess};
use crate::lineup::PositionId;
use std::fmt;

/// Why a submitted guess was not recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Input(InputError),
    UnknownPosition(PositionId),
    PositionSolved(PositionId),
    NoLivesRemaining(PositionId),
    GameFinished,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "{e}"),
            Self::UnknownPosition(id) => write!(f, "Position {id} is not part of this lineup"),
            Self::PositionSolved(id) => write!(f, "Position {id} is already solved"),
            Self::NoLivesRemaining(id) => write!(f, "Out of guesses for {id}"),
            Self::GameFinished => write!(f, "The game is over, reset to play again"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for GuessError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl GameStore {
    /// Validate, score and record `raw` as a guess for `position`
    ///
    /// # Errors
    /// Returns `GuessError` if the game is finished, the position is unknown,
    /// solved or out of lives, or the text is not a valid name of the answer's
    /// length. Nothing is recorded in that case.
    ///
    /// # Examples
    /// ```
    /// use lineup_wordle::game::{GameStore, StoreConfig};
    /// use lineup_wordle::lineup::{PositionId, loader::embedded_catalog};
    ///
    /// let mut store = GameStore::new(embedded_catalog().unwrap(), StoreConfig::new()).unwrap();
    /// let guess = store.submit_guess(PositionId::Rcm, "docirm").unwrap();
    /// assert!(!guess.is_correct());
    ///
    /// let guess = store.submit_guess(PositionId::Rcm, "modric").unwrap();
    /// assert!(guess.is_correct());
    /// assert!(store.state().position(PositionId::Rcm).unwrap().is_solved());
    /// ```
    pub fn submit_guess(
        &mut self,
        position: PositionId,
        raw: &str,
    ) -> Result<NameGuess, GuessError> {
        let state = self.state();
        if state.is_finished() {
            return Err(GuessError::GameFinished);
        }

        let slot = state
            .position(position)
            .ok_or(GuessError::UnknownPosition(position))?;
        if slot.is_solved() {
            return Err(GuessError::PositionSolved(position));
        }
        if slot.lives_remaining() == 0 {
            return Err(GuessError::NoLivesRemaining(position));
        }

        let answer = state
            .answer_for(position)
            .ok_or(GuessError::UnknownPosition(position))?;
        let input = GuessInput::new(raw, answer.name_len())?;
        let guess = NameGuess::evaluate(input.text(), answer.name());
        let is_correct = guess.is_correct();

        if !self.add_guess(position, guess.clone(), is_correct) {
            return Err(GuessError::NoLivesRemaining(position));
        }
        Ok(guess)
    }
}
