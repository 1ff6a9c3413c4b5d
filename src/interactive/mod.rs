//! Interactive TUI interface
//!
//! Full-screen game mode built on ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
