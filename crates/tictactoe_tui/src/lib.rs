//! Terminal front-end for tic-tac-toe with move history.
//!
//! # Architecture
//!
//! - **CLI**: `play` (interactive) and `replay` (headless) commands
//! - **Config**: TOML file with logging and game options
//! - **App**: owns the [`GameState`](tictactoe_core::GameState) and turns
//!   keys into [`GameEvent`](tictactoe_core::GameEvent)s
//! - **UI**: stateless ratatui rendering of the core read model

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command, PlayArgs, ReplayArgs};
pub use config::{ConfigError, TuiConfig};
pub use input::move_cursor;
pub use replay::{ReplayReport, parse_moves, render_text, run_replay};
pub use terminal::run_tui;
