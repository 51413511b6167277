//! TUI application state and logic

use crate::core::is_name_char;
use crate::game::{GameActions, GameStatus, GameStore};
use crate::lineup::{PositionId, PositionSlot};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub store: GameStore,
    /// Index into [`App::slots`] of the highlighted position
    pub cursor: usize,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Moving around the pitch
    Browse,
    /// Typing a name for the active position
    Guessing,
    /// Banner shown, waiting for reset / next match / quit
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
}

impl App {
    #[must_use]
    pub fn new(store: GameStore) -> Self {
        Self {
            store,
            cursor: 0,
            input_buffer: String::new(),
            input_mode: InputMode::Browse,
            messages: vec![
                Message {
                    text: "Guess the starting eleven, one name per position.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Arrows/Tab to move, Enter to guess, r reset, m next match, q quit"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Formation slots of the current match, top-left to bottom-right
    #[must_use]
    pub fn slots(&self) -> Vec<PositionSlot> {
        let mut slots = self.store.state().current_match().formation.slots().to_vec();
        slots.sort_by_key(|s| (s.row, s.col));
        slots
    }

    #[must_use]
    pub fn selected(&self) -> Option<PositionSlot> {
        self.slots().get(self.cursor).copied()
    }

    /// Position whose guesses the detail panel shows
    #[must_use]
    pub fn focused_position(&self) -> Option<PositionId> {
        self.store
            .state()
            .active_position_id()
            .or_else(|| self.selected().map(|s| s.id))
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Step through slots in reading order
    pub fn move_linear(&mut self, forward: bool) {
        let count = self.slots().len();
        if count == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % count
        } else {
            (self.cursor + count - 1) % count
        };
    }

    /// Jump to the nearest slot in the next occupied row above or below
    pub fn move_vertical(&mut self, down: bool) {
        let slots = self.slots();
        let Some(current) = slots.get(self.cursor) else {
            return;
        };
        let target_row = slots
            .iter()
            .map(|s| s.row)
            .filter(|&r| if down { r > current.row } else { r < current.row })
            .reduce(|a, b| if down { a.min(b) } else { a.max(b) });
        let Some(row) = target_row else {
            return;
        };
        if let Some(index) = slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.row == row)
            .min_by_key(|(_, s)| s.col.abs_diff(current.col))
            .map(|(i, _)| i)
        {
            self.cursor = index;
        }
    }

    /// Open the highlighted position for guessing
    pub fn open_selected(&mut self) {
        let Some(slot) = self.selected() else {
            return;
        };
        let Some((solved, playable)) = self
            .store
            .state()
            .position(slot.id)
            .map(|p| (p.is_solved(), p.can_guess()))
        else {
            return;
        };
        if solved {
            self.add_message(&format!("{} is already solved", slot.id), MessageStyle::Info);
            return;
        }
        if !playable {
            self.add_message(&format!("No lives left for {}", slot.id), MessageStyle::Error);
            return;
        }

        self.store.set_active_position(Some(slot.id));
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
    }

    /// Close the guess box without guessing
    pub fn close_guess(&mut self) {
        self.store.set_active_position(None);
        self.input_buffer.clear();
        self.input_mode = InputMode::Browse;
    }

    /// Score the input buffer against the active position
    pub fn submit(&mut self) {
        let Some(position) = self.store.state().active_position_id() else {
            self.input_mode = InputMode::Browse;
            return;
        };

        match self.store.submit_guess(position, &self.input_buffer) {
            Ok(guess) => {
                self.input_buffer.clear();
                if guess.is_correct() {
                    let text = format!("✓ {position}: {}", guess.guess_name());
                    self.add_message(&text, MessageStyle::Success);
                } else {
                    let lives = self
                        .store
                        .state()
                        .position(position)
                        .map_or(0, |p| p.lives_remaining());
                    let text = format!(
                        "{position}: {} ({} correct, {} present, {lives} lives left)",
                        guess.guess_name(),
                        guess.count_correct(),
                        guess.count_present()
                    );
                    self.add_message(&text, MessageStyle::Info);
                }

                let playable = self
                    .store
                    .state()
                    .position(position)
                    .is_some_and(|p| p.can_guess());
                if self.store.state().is_finished() {
                    self.finish_game();
                } else if !playable {
                    self.close_guess();
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        match self.store.state().status() {
            GameStatus::GameWon => {
                self.stats.games_won += 1;
                self.add_message("🏆 Full time: every position solved!", MessageStyle::Success);
            }
            GameStatus::GameOver => {
                self.stats.games_lost += 1;
                self.add_message("❌ Game over: a position ran out of lives", MessageStyle::Error);
            }
            GameStatus::Playing => {}
        }
        self.input_buffer.clear();
        self.input_mode = InputMode::Finished;
    }

    /// Start the current match over
    pub fn reset(&mut self) {
        self.store.reset_game();
        self.input_buffer.clear();
        self.input_mode = InputMode::Browse;
        self.add_message("Game reset", MessageStyle::Info);
    }

    /// Move on to the next match in the catalog
    pub fn next_match(&mut self) {
        let current = self.store.state().current_match().match_id;
        let next = self.store.catalog().next_after(current).match_id;
        if !self.store.select_match(next) {
            self.add_message("No other match in the catalog", MessageStyle::Info);
            return;
        }
        let title = self.store.state().current_match().title();
        self.add_message(&format!("Now playing {title}"), MessageStyle::Info);
        self.cursor = 0;
        self.input_buffer.clear();
        self.input_mode = InputMode::Browse;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Browse => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('m') => self.next_match(),
                KeyCode::Left | KeyCode::BackTab => self.move_linear(false),
                KeyCode::Right | KeyCode::Tab => self.move_linear(true),
                KeyCode::Up => self.move_vertical(false),
                KeyCode::Down => self.move_vertical(true),
                KeyCode::Enter => self.open_selected(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.close_guess(),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) if is_name_char(c) => {
                    let limit = self
                        .store
                        .state()
                        .active_position_id()
                        .and_then(|id| self.store.state().answer_for(id))
                        .map_or(usize::MAX, |p| p.name_len());
                    if self.input_buffer.chars().count() < limit {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                _ => {}
            },
            InputMode::Finished => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('m') => self.next_match(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// Installs `tui-logger` so library log records show up in the log panel.
///
/// # Errors
///
/// Returns an error if the logger cannot be installed, terminal setup/cleanup
/// fails, or there's an I/O error during rendering or event handling.
pub fn run_tui(app: App, log_level: LevelFilter) -> Result<()> {
    tui_logger::init_logger(LevelFilter::Trace)?;
    tui_logger::set_default_level(log_level);
    log::info!("starting on match {}", app.store.state().current_match().match_id);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
