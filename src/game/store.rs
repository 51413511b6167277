//! The game store: single source of truth for a play session

use super::state::{GameState, MAX_LIVES};
use crate::core::NameGuess;
use crate::lineup::{MatchCatalog, PositionId};
use std::fmt;

/// Actions a view may perform on a game session
///
/// Every action is synchronous and either applies completely or is a no-op.
pub trait GameActions {
    /// Switch to `match_id`; returns whether anything changed
    fn select_match(&mut self, match_id: u32) -> bool;

    /// Focus a slot's guessing UI, or close it with `None`
    fn set_active_position(&mut self, position: Option<PositionId>);

    /// Record a scored guess; returns whether it was accepted
    fn add_guess(&mut self, position: PositionId, guess: NameGuess, is_correct: bool) -> bool;

    /// Start the current match over
    fn reset_game(&mut self);
}

/// Store construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub max_lives: usize,
    pub initial_match: Option<u32>,
}

impl StoreConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_lives: MAX_LIVES,
            initial_match: None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Error type for store construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    UnknownMatch(u32),
    NoLives,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMatch(id) => write!(f, "No match with id {id} in the catalog"),
            Self::NoLives => write!(f, "At least one life per position is required"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Holds the catalog and the current `GameState`
///
/// Views read snapshots through [`GameStore::state`] and change them only via
/// [`GameActions`].
#[derive(Debug, Clone)]
pub struct GameStore {
    catalog: MatchCatalog,
    state: GameState,
}

impl GameStore {
    /// Create a store positioned on the configured (or first) match
    ///
    /// # Errors
    /// Returns `StoreError` if `initial_match` is not in the catalog or
    /// `max_lives` is zero.
    ///
    /// # Examples
    /// ```
    /// use lineup_wordle::game::{GameStore, StoreConfig};
    /// use lineup_wordle::lineup::loader::embedded_catalog;
    ///
    /// let store = GameStore::new(embedded_catalog().unwrap(), StoreConfig::new()).unwrap();
    /// assert_eq!(store.state().current_match().match_id, 1);
    /// ```
    pub fn new(catalog: MatchCatalog, config: StoreConfig) -> Result<Self, StoreError> {
        if config.max_lives == 0 {
            return Err(StoreError::NoLives);
        }

        let first = match config.initial_match {
            Some(id) => catalog.find(id).ok_or(StoreError::UnknownMatch(id))?,
            None => catalog.first(),
        };
        let state = GameState::initial(first.clone(), config.max_lives);
        log::debug!("store created on match {}", state.current_match().match_id);

        Ok(Self { catalog, state })
    }

    /// Current read-only snapshot
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &MatchCatalog {
        &self.catalog
    }
}

impl GameActions for GameStore {
    fn select_match(&mut self, match_id: u32) -> bool {
        if self.state.current_match().match_id == match_id {
            return false;
        }
        let Some(next) = self.catalog.find(match_id) else {
            log::warn!("select_match ignored: unknown match {match_id}");
            return false;
        };

        self.state = self.state.with_match(next.clone());
        log::info!("selected match {match_id}: {}", next.title());
        true
    }

    fn set_active_position(&mut self, position: Option<PositionId>) {
        self.state = self.state.with_active_position(position);
    }

    fn add_guess(&mut self, position: PositionId, guess: NameGuess, is_correct: bool) -> bool {
        let name = guess.guess_name().to_string();
        let Some(next) = self.state.with_guess(position, guess, is_correct) else {
            log::warn!("add_guess ignored for {position}");
            return false;
        };

        let was_finished = (self.state.is_game_over(), self.state.is_game_won());
        self.state = next;

        log::debug!(
            "{position}: guessed {name} (correct: {is_correct}), {} lives left",
            self.state
                .position(position)
                .map_or(0, |p| p.lives_remaining())
        );
        if self.state.is_game_over() && !was_finished.0 {
            log::info!("game over: {position} ran out of lives");
        }
        if self.state.is_game_won() && !was_finished.1 {
            log::info!("game won: all positions solved");
        }
        true
    }

    fn reset_game(&mut self) {
        self.state = self.state.reset();
        log::info!("game reset on match {}", self.state.current_match().match_id);
    }
}
