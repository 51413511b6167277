//! Terminal UI
//!
//! A ratatui front end over the same `GameStore` the line mode uses.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, run_tui};
