//! Display functions for command results

use super::formatters::{create_progress_bar, guess_tiles, lives_bar, pitch_rows};
use crate::commands::{CompareResult, SimulationStats, list_matches};
use crate::core::NameGuess;
use crate::game::{GameState, GameStatus};
use crate::lineup::{MatchCatalog, PositionId};
use colored::Colorize;

/// Print one scored guess as coloured tiles
pub fn print_feedback(position: PositionId, guess: &NameGuess) {
    let verdict = if guess.is_correct() {
        "✅ solved".green().bold()
    } else {
        format!("{} correct, {} present", guess.count_correct(), guess.count_present()).normal()
    };
    println!("\n  {position:<4} {}  {verdict}\n", guess_tiles(guess));
}

/// Print the pitch, then every position with its guesses and lives
pub fn print_game_board(state: &GameState) {
    let current = state.current_match();
    println!("\n{}", "─".repeat(70).cyan());
    println!(
        "{}  {}  {}",
        current.title().bright_yellow().bold(),
        current.date.bright_black(),
        current.formation.to_string().cyan()
    );
    println!("{}", "─".repeat(70).cyan());

    for row in pitch_rows(state) {
        println!("{row}");
    }
    println!();

    for player in &current.lineup {
        let Some(position) = state.position(player.position_id) else {
            continue;
        };
        let marker = if state.active_position_id() == Some(player.position_id) {
            "▶".bright_cyan().bold()
        } else {
            " ".normal()
        };
        let status = if position.is_solved() {
            player.name().green().bold()
        } else {
            format!("{} letters", player.name_len()).bright_black()
        };
        println!(
            "{marker} {:<4} {} {}",
            player.position_id.code(),
            lives_bar(position.lives_remaining(), state.max_lives()).red(),
            status
        );
        for guess in position.guesses() {
            println!("         {}", guess_tiles(guess));
        }
    }

    println!(
        "\n  Solved {}/{}\n",
        state.solved_count(),
        state.guesses_by_position().len()
    );
}

/// Print the end-of-game banner and reveal every answer
pub fn print_game_summary(state: &GameState) {
    let (banner, color_ok) = match state.status() {
        GameStatus::GameWon => ("    🏆  F U L L   T I M E :   Y O U   W I N !  🏆    ", true),
        GameStatus::GameOver => ("    ❌  G A M E   O V E R  ❌    ", false),
        GameStatus::Playing => return,
    };

    println!("\n{}", "═".repeat(70).bright_cyan());
    if color_ok {
        println!("{}", banner.bright_green().bold());
    } else {
        println!("{}", banner.bright_red().bold());
    }
    println!("{}", "═".repeat(70).bright_cyan());

    let current = state.current_match();
    println!("\n  {} ({})", current.title().bold(), current.formation);
    for player in &current.lineup {
        let solved = state
            .position(player.position_id)
            .is_some_and(|p| p.is_solved());
        let name = if solved {
            player.name().green()
        } else {
            player.name().red()
        };
        println!(
            "  {:>3} {:<4} {:<14} {}",
            player.player.kit_number,
            player.position_id.code(),
            name,
            player.player.nationality.bright_black()
        );
    }
    println!();
}

/// Print every catalog match, marking `current`
pub fn print_match_list(catalog: &MatchCatalog, current: u32) {
    println!("\n📋 {}", "Matches".bright_cyan().bold());
    for row in list_matches(catalog) {
        let marker = if row.match_id == current { "▶" } else { " " };
        println!(
            "{marker} {:>3}  {}  {:<8} {}",
            row.match_id,
            row.date.bright_black(),
            row.formation.to_string().cyan(),
            row.title
        );
    }
    println!();
}

/// Print the result of a single comparison
pub fn print_comparison(result: &CompareResult) {
    println!(
        "\n{} vs {}",
        result.guess.guess_name().bright_white().bold(),
        result.answer.bright_yellow().bold()
    );
    println!("  {}", guess_tiles(&result.guess));
    println!("  {}", result.guess.to_emoji());
    println!(
        "  {} correct, {} present",
        result.guess.count_correct(),
        result.guess.count_present()
    );
    if result.length_mismatch {
        println!(
            "  {}",
            "Lengths differ; in a game this guess would be refused".yellow()
        );
    }
    println!();
}

/// Print simulation statistics
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ({} strategy) ", stats.strategy);
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {}", stats.games_played);
    println!(
        "  Games won:           {} {}",
        stats.games_won,
        format!("({:.1}%)", stats.win_rate()).green()
    );
    println!("  Positions solved:    {}", stats.positions_solved);
    if stats.positions_failed > 0 {
        println!(
            "  Positions lost:      {}",
            stats.positions_failed.to_string().red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guesses per Solved Position".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (guesses, count) in &stats.guess_distribution {
        let percentage = *count as f64 / stats.positions_solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(*count as f64, max_count as f64, 40);
        println!("  {guesses} guesses: {} {count:5} ({percentage:5.1}%)", bar.green());
    }

    if !stats.hardest_names.is_empty() {
        println!("\n😰 {}", "Hardest Names".yellow().bold());
        for (name, average) in &stats.hardest_names {
            println!("  {} ({average:.2} guesses)", name.yellow());
        }
    }
    println!();
}
