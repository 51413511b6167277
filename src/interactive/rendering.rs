//! TUI rendering with ratatui
//!
//! Pitch grid, guess history, input box, match list, messages and the log panel.

use super::app::{App, InputMode, MessageStyle};
use crate::commands::list_matches;
use crate::core::{LetterStatus, NameGuess};
use crate::game::{GameState, GameStatus};
use crate::lineup::{PITCH_COLS, PITCH_ROWS, PositionSlot};
use crate::output::formatters::lives_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};
use tui_logger::TuiLoggerWidget;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(18),   // Pitch and detail
            Constraint::Length(8), // Messages and log
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Pitch
            Constraint::Percentage(40), // Selected position
        ])
        .split(chunks[1]);

    render_pitch(f, app, main_chunks[0]);
    render_detail(f, app, main_chunks[1]);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Matches
            Constraint::Percentage(35), // Messages
            Constraint::Percentage(35), // Log
        ])
        .split(chunks[2]);

    render_matches(f, app, bottom_chunks[0]);
    render_messages(f, app, bottom_chunks[1]);
    render_log(f, bottom_chunks[2]);

    if app.input_mode == InputMode::Finished {
        render_banner(f, app.store.state(), f.area());
    }
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let state = app.store.state();
    let current = state.current_match();
    let line = Line::from(vec![
        Span::styled(
            format!("⚽ {}", current.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {}  {}", current.date, current.formation)),
        Span::styled(
            format!(
                "  solved {}/{}  W {} L {}",
                state.solved_count(),
                state.guesses_by_position().len(),
                app.stats.games_won,
                app.stats.games_lost
            ),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(rounded("").style(Style::default().fg(Color::Cyan)));
    f.render_widget(header, area);
}

fn render_pitch(f: &mut Frame, app: &App, area: Rect) {
    let state = app.store.state();
    let block = rounded(" Pitch ").style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, u32::from(PITCH_ROWS)); usize::from(PITCH_ROWS)])
        .split(inner);

    let selected = app.selected().map(|s| s.id);
    for slot in state.current_match().formation.slots() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, u32::from(PITCH_COLS)); usize::from(PITCH_COLS)])
            .split(rows[usize::from(slot.row)]);
        let cell = cols[usize::from(slot.col)];
        render_slot(f, state, slot, selected == Some(slot.id), cell);
    }
}

fn render_slot(f: &mut Frame, state: &GameState, slot: &PositionSlot, selected: bool, area: Rect) {
    let Some(position) = state.position(slot.id) else {
        return;
    };

    let (name, color) = if position.is_solved() {
        let name = state
            .answer_for(slot.id)
            .map_or_else(String::new, |p| p.name().to_string());
        (name, Color::Green)
    } else if position.is_exhausted() {
        ("✗".to_string(), Color::Red)
    } else {
        let len = state.answer_for(slot.id).map_or(0, |p| p.name_len());
        (format!("? ({len})"), Color::White)
    };

    let mut border = Style::default().fg(color);
    if selected {
        border = border.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if state.active_position_id() == Some(slot.id) {
        border = border.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![
        Line::from(Span::styled(
            name,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            lives_bar(position.lives_remaining(), state.max_lives()),
            Style::default().fg(Color::Red),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", slot.id))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(paragraph, area);
}

fn render_detail(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Lives gauge
            Constraint::Min(5),    // Guess history
            Constraint::Length(3), // Input
        ])
        .split(area);

    let state = app.store.state();
    let Some(id) = app.focused_position() else {
        return;
    };
    let Some(position) = state.position(id) else {
        return;
    };

    let max = state.max_lives().max(1);
    let gauge = Gauge::default()
        .block(rounded(" Lives "))
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(position.lives_remaining() as f64 / max as f64)
        .label(format!("{}/{}", position.lives_remaining(), state.max_lives()));
    f.render_widget(gauge, chunks[0]);

    let items: Vec<ListItem> = position
        .guesses()
        .iter()
        .map(|g| ListItem::new(guess_line(g)))
        .collect();
    let area_label = state
        .current_match()
        .formation
        .slot(id)
        .map_or_else(String::new, |s| format!(" [{}]", s.grid_area()));
    let title = format!(" {} - {}{area_label} ", id.code(), id.display_name());
    f.render_widget(List::new(items).block(rounded(&title)), chunks[1]);

    let (text, style) = match app.input_mode {
        InputMode::Guessing => (
            format!("{}█", app.input_buffer),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Browse if position.can_guess() => (
            "Press Enter to guess".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        _ => (String::new(), Style::default()),
    };
    let input = Paragraph::new(text).style(style).block(rounded(" Guess "));
    f.render_widget(input, chunks[2]);
}

/// A guess as coloured letter tiles
fn guess_line(guess: &NameGuess) -> Line<'static> {
    let spans: Vec<Span> = guess
        .feedback()
        .iter()
        .map(|l| {
            let bg = match l.status {
                LetterStatus::Correct => Color::Green,
                LetterStatus::Present => Color::Yellow,
                LetterStatus::Absent => Color::DarkGray,
            };
            Span::styled(
                format!(" {} ", l.letter),
                Style::default()
                    .fg(Color::Black)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

fn render_matches(f: &mut Frame, app: &App, area: Rect) {
    let current = app.store.state().current_match().match_id;
    let items: Vec<ListItem> = list_matches(app.store.catalog())
        .into_iter()
        .map(|row| {
            let style = if row.match_id == current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Span::styled(
                format!("{} {} ({})", row.date, row.title, row.formation),
                style,
            ))
        })
        .collect();
    f.render_widget(List::new(items).block(rounded(" Matches (m) ")), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|m| {
            let color = match m.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            ListItem::new(Span::styled(m.text.clone(), Style::default().fg(color)))
        })
        .collect();
    f.render_widget(List::new(items).block(rounded(" Messages ")), area);
}

fn render_log(f: &mut Frame, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(rounded(" Log "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .style_debug(Style::default().fg(Color::Gray))
        .output_target(false)
        .output_file(false)
        .output_line(false);
    f.render_widget(widget, area);
}

fn render_banner(f: &mut Frame, state: &GameState, area: Rect) {
    let (title, color) = match state.status() {
        GameStatus::GameWon => ("🏆 FULL TIME - YOU WIN! 🏆", Color::Green),
        GameStatus::GameOver => ("❌ GAME OVER ❌", Color::Red),
        GameStatus::Playing => return,
    };

    let current = state.current_match();
    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(current.title()),
        Line::from(""),
    ];
    for player in &current.lineup {
        let solved = state
            .position(player.position_id)
            .is_some_and(|p| p.is_solved());
        let name_color = if solved { Color::Green } else { Color::Red };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<4}", player.position_id.code())),
            Span::styled(
                format!("{:<14}", player.name()),
                Style::default().fg(name_color),
            ),
            Span::styled(
                format!("#{} {}", player.player.kit_number, player.player.nationality),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("r replay · m next match · q quit"));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = centered_rect(50, height, area);
    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(rounded(" Result ").border_style(Style::default().fg(color)));
    f.render_widget(Clear, popup);
    f.render_widget(banner, popup);
}

/// Rectangle of `percent_x` width and `height` rows centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
