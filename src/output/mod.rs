//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_comparison, print_feedback, print_game_board, print_game_summary, print_match_list,
    print_simulation_stats,
};
