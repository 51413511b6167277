//! Game session state and its pure transitions
//!
//! Every transition builds a complete new `GameState` from the previous one;
//! nothing is patched in place. `GameStore` swaps the result in.

use crate::core::NameGuess;
use crate::lineup::{MatchSolution, PositionId, SolutionPlayer};
use std::collections::BTreeMap;

/// Attempts allowed per position
pub const MAX_LIVES: usize = 5;

/// Progress on a single lineup slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionState {
    position_id: PositionId,
    is_solved: bool,
    guesses: Vec<NameGuess>,
    lives_remaining: usize,
}

impl PositionState {
    /// Unsolved slot with no guesses and every life left
    #[must_use]
    pub const fn fresh(position_id: PositionId, max_lives: usize) -> Self {
        Self {
            position_id,
            is_solved: false,
            guesses: Vec::new(),
            lives_remaining: max_lives,
        }
    }

    /// Append a guess; solved never reverts
    fn with_guess(&self, guess: NameGuess, is_correct: bool, max_lives: usize) -> Self {
        let mut guesses = self.guesses.clone();
        guesses.push(guess);
        let lives_remaining = max_lives.saturating_sub(guesses.len());

        Self {
            position_id: self.position_id,
            is_solved: self.is_solved || is_correct,
            guesses,
            lives_remaining,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position_id(&self) -> PositionId {
        self.position_id
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.is_solved
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[NameGuess] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn lives_remaining(&self) -> usize {
        self.lives_remaining
    }

    /// Out of lives without having been solved
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        !self.is_solved && self.lives_remaining == 0
    }

    /// Whether the view should still accept guesses here
    #[must_use]
    pub const fn can_guess(&self) -> bool {
        !self.is_solved && self.lives_remaining > 0
    }
}

/// Derived session outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
    GameWon,
}

/// Everything a view needs to render one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current_match: MatchSolution,
    guesses_by_position: BTreeMap<PositionId, PositionState>,
    active_position_id: Option<PositionId>,
    is_game_over: bool,
    is_game_won: bool,
    max_lives: usize,
}

impl GameState {
    /// Fresh session for `current_match`: one untouched slot per lineup entry
    #[must_use]
    pub fn initial(current_match: MatchSolution, max_lives: usize) -> Self {
        let guesses_by_position = current_match
            .position_ids()
            .map(|id| (id, PositionState::fresh(id, max_lives)))
            .collect();

        Self {
            current_match,
            guesses_by_position,
            active_position_id: None,
            is_game_over: false,
            is_game_won: false,
            max_lives,
        }
    }

    /// Switch to another match, starting it from scratch
    #[must_use]
    pub fn with_match(&self, next: MatchSolution) -> Self {
        Self::initial(next, self.max_lives)
    }

    /// Focus a slot (or none); no validation
    #[must_use]
    pub fn with_active_position(&self, position: Option<PositionId>) -> Self {
        Self {
            active_position_id: position,
            ..self.clone()
        }
    }

    /// Record a guess on `position` and recompute the global flags
    ///
    /// Returns `None` when the position is not part of the lineup or has no
    /// lives left to spend. Solved-ness is applied before the life check, so a
    /// correct guess on the last life wins the slot instead of ending the game.
    #[must_use]
    pub fn with_guess(
        &self,
        position: PositionId,
        guess: NameGuess,
        is_correct: bool,
    ) -> Option<Self> {
        let current = self.guesses_by_position.get(&position)?;
        if current.lives_remaining == 0 {
            return None;
        }

        let updated = current.with_guess(guess, is_correct, self.max_lives);
        let mut guesses_by_position = self.guesses_by_position.clone();
        guesses_by_position.insert(position, updated);

        let is_game_over = self.is_game_over
            || guesses_by_position
                .values()
                .any(PositionState::is_exhausted);
        let is_game_won = self.is_game_won
            || guesses_by_position
                .values()
                .all(PositionState::is_solved);

        let newly_finished =
            (is_game_over && !self.is_game_over) || (is_game_won && !self.is_game_won);
        let active_position_id = if newly_finished {
            None
        } else {
            self.active_position_id
        };

        Some(Self {
            current_match: self.current_match.clone(),
            guesses_by_position,
            active_position_id,
            is_game_over,
            is_game_won,
            max_lives: self.max_lives,
        })
    }

    /// Same match, clean slate
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::initial(self.current_match.clone(), self.max_lives)
    }

    #[inline]
    #[must_use]
    pub const fn current_match(&self) -> &MatchSolution {
        &self.current_match
    }

    #[inline]
    #[must_use]
    pub const fn guesses_by_position(&self) -> &BTreeMap<PositionId, PositionState> {
        &self.guesses_by_position
    }

    #[must_use]
    pub fn position(&self, id: PositionId) -> Option<&PositionState> {
        self.guesses_by_position.get(&id)
    }

    #[inline]
    #[must_use]
    pub const fn active_position_id(&self) -> Option<PositionId> {
        self.active_position_id
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[inline]
    #[must_use]
    pub const fn is_game_won(&self) -> bool {
        self.is_game_won
    }

    #[inline]
    #[must_use]
    pub const fn max_lives(&self) -> usize {
        self.max_lives
    }

    /// Either terminal flag is set
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.is_game_over || self.is_game_won
    }

    /// The first terminal flag reached wins; game over is sticky
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.is_game_over {
            GameStatus::GameOver
        } else if self.is_game_won {
            GameStatus::GameWon
        } else {
            GameStatus::Playing
        }
    }

    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.guesses_by_position
            .values()
            .filter(|p| p.is_solved())
            .count()
    }

    /// Hidden answer for a slot of the current match
    #[must_use]
    pub fn answer_for(&self, position: PositionId) -> Option<&SolutionPlayer> {
        self.current_match.player_at(position)
    }
}
