//! Lineup Wordle - CLI
//!
//! Guess historic starting lineups in a TUI or line mode, compare names, and
//! run automatic play over the match catalog.

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use lineup_wordle::{
    commands::{SimulationConfig, compare_guess, run_simple, run_simulation},
    game::{GameStore, MAX_LIVES, StoreConfig},
    lineup::{MatchCatalog, loader::load_catalog},
    output::{print_comparison, print_match_list, print_simulation_stats},
    solver::StrategyType,
};
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "lineup_wordle",
    about = "Guess a historic match lineup letter by letter, Wordle style",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Match catalog: 'embedded' (default) or path to a JSON file
    #[arg(short, long, global = true, default_value = "embedded")]
    catalog: String,

    /// Match id to start on (default: first in the catalog)
    #[arg(short, long = "match", global = true)]
    match_id: Option<u32>,

    /// Lives per position
    #[arg(
        short,
        long,
        global = true,
        default_value_t = MAX_LIVES,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    lives: usize,

    /// Log level shown in the TUI log panel
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// List the matches in the catalog
    Matches,

    /// Score one guessed name against an answer
    Compare {
        /// The guessed name
        guess: String,

        /// The hidden name
        answer: String,
    },

    /// Play every match automatically and report statistics
    Simulate {
        /// Games per match
        #[arg(short = 'n', long, default_value = "20")]
        games: usize,

        /// Strategy: spread (default), first, random
        #[arg(short, long, default_value = "spread")]
        strategy: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = StoreConfig {
        max_lives: cli.lives,
        initial_match: cli.match_id,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(load(&cli.catalog)?, config, cli.log_level.into()),
        Commands::Simple => run_simple_command(load(&cli.catalog)?, config),
        Commands::Matches => {
            let catalog = load(&cli.catalog)?;
            let current = cli.match_id.unwrap_or_else(|| catalog.first().match_id);
            print_match_list(&catalog, current);
            Ok(())
        }
        Commands::Compare { guess, answer } => {
            print_comparison(&compare_guess(&guess, &answer));
            Ok(())
        }
        Commands::Simulate { games, strategy } => {
            run_simulate_command(&load(&cli.catalog)?, games, &strategy, cli.lives)
        }
    }
}

/// Load the catalog named by `--catalog`
fn load(source: &str) -> Result<MatchCatalog> {
    load_catalog(source).with_context(|| format!("could not load catalog '{source}'"))
}

fn run_play_command(catalog: MatchCatalog, config: StoreConfig, level: LevelFilter) -> Result<()> {
    use lineup_wordle::interactive::{App, run_tui};

    let store = GameStore::new(catalog, config)?;
    run_tui(App::new(store), level)
}

fn run_simple_command(catalog: MatchCatalog, config: StoreConfig) -> Result<()> {
    let mut store = GameStore::new(catalog, config)?;
    run_simple(&mut store).map_err(|e| anyhow::anyhow!(e))
}

fn run_simulate_command(
    catalog: &MatchCatalog,
    games: usize,
    strategy_name: &str,
    lives: usize,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);

    println!("\n{}", "═".repeat(70));
    println!(" Lineup Simulation ");
    println!("{}", "═".repeat(70));
    println!(
        "\n{} matches × {games} games, {lives} lives per position",
        catalog.len()
    );
    println!("Strategy: {}\n", strategy.name());

    let config = SimulationConfig {
        games_per_match: games,
        max_lives: lives,
        strategy,
        show_progress: true,
    };
    let stats = run_simulation(catalog, config)?;
    print_simulation_stats(&stats);
    Ok(())
}
