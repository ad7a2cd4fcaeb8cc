//! Command-line interface for the tic-tac-toe front-end.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Apply a list of moves and print the resulting view
    Replay(ReplayArgs),
}

/// Options for the interactive UI.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Start with the move list newest-first
    #[arg(long)]
    pub descending: bool,

    /// Allow moves from a past snapshot (discards later moves)
    #[arg(long)]
    pub allow_branching: bool,
}

/// Options for the headless replay.
#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Comma-separated events: a square index (0-8) plays there, `@N`
    /// jumps to step N, `s` toggles sort order, `r` restarts.
    /// Example: "0,4,1,@1,8"
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub moves: String,

    /// Step to display after the moves are applied
    #[arg(short, long)]
    pub jump: Option<usize>,

    /// Start with the move list newest-first
    #[arg(long)]
    pub descending: bool,

    /// Allow moves from a past snapshot (discards later moves)
    #[arg(long)]
    pub allow_branching: bool,

    /// Print the view as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
