//! Terminal tic-tac-toe.
//!
//! The game rules, undo/redo history and computer opponent live in
//! [`tictactoe_core`]; this crate adds configuration and the ratatui
//! presentation layer that turns key presses into controller events and
//! controller notifications into frames.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use tui::{Action, App, BoardScreen, DifficultyScreen, MenuScreen, Screen, run};
