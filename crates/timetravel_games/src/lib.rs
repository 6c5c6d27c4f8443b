//! Terminal frontend for time-travel tic-tac-toe.
//!
//! Parses line commands, drives a [`timetravel_tictactoe::GameController`]
//! and prints every frame as text or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod frame;
mod session;

pub use cli::Cli;
pub use command::{Command, CommandError, HELP};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, DisplayConfig, LogConfig};
pub use frame::{OutputFormat, render_board, render_json, render_moves, render_text};
pub use session::{Flow, Session};
