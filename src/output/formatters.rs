//! Formatting utilities for terminal output

use crate::core::{GuessLetter, LetterStatus, NameGuess};
use crate::game::GameState;
use crate::lineup::{PITCH_COLS, PITCH_ROWS, PositionSlot};
use colored::{ColoredString, Colorize};

/// Width of one pitch cell in characters
pub const CELL_WIDTH: usize = 14;

/// A single letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: GuessLetter) -> ColoredString {
    let text = format!(" {} ", letter.letter);
    match letter.status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// A whole guess as a row of coloured tiles
#[must_use]
pub fn guess_tiles(guess: &NameGuess) -> String {
    guess
        .feedback()
        .iter()
        .map(|&l| letter_tile(l).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Hearts for the lives left out of `max`
#[must_use]
pub fn lives_bar(remaining: usize, max: usize) -> String {
    let remaining = remaining.min(max);
    format!("{}{}", "♥".repeat(remaining), "♡".repeat(max - remaining))
}

/// Plain label for a pitch slot: the name once solved, else code and lives
#[must_use]
pub fn slot_label(state: &GameState, slot: &PositionSlot) -> String {
    let Some(position) = state.position(slot.id) else {
        return String::new();
    };
    if position.is_solved() {
        state
            .answer_for(slot.id)
            .map_or_else(String::new, |p| p.name().to_string())
    } else {
        format!("{} ?{}", slot.id, position.lives_remaining())
    }
}

/// The formation as rows of fixed-width cells, top (attack) to bottom
///
/// Empty pitch rows are dropped.
#[must_use]
pub fn pitch_rows(state: &GameState) -> Vec<String> {
    let slots = state.current_match().formation.slots();
    (0..PITCH_ROWS)
        .filter_map(|row| {
            let in_row: Vec<&PositionSlot> =
                slots.iter().filter(|s| s.row == row).collect();
            if in_row.is_empty() {
                return None;
            }
            let line: String = (0..PITCH_COLS)
                .map(|col| {
                    let label = in_row
                        .iter()
                        .find(|s| s.col == col)
                        .map_or_else(String::new, |s| slot_label(state, s));
                    format!("{:^width$}", truncate(&label, CELL_WIDTH), width = CELL_WIDTH)
                })
                .collect();
            Some(line.trim_end().to_string())
        })
        .collect()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}
