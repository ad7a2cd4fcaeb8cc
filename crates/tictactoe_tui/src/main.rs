//! Tic-tac-toe - unified CLI
//!
//! Interactive terminal play, or a headless replay of a move script.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tictactoe_tui::{Cli, Command, PlayArgs, ReplayArgs, TuiConfig, render_text, run_replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?;

    match cli.command {
        None => play(&config, PlayArgs::default()),
        Some(Command::Play(args)) => play(&config, args),
        Some(Command::Replay(args)) => replay(&config, args),
    }
}

/// Run the interactive UI, logging to a file so the terminal stays clean
fn play(config: &TuiConfig, args: PlayArgs) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    let options = config.game_options(args.descending, args.allow_branching);
    run_tui(options, config.tick_rate())
}

/// Run a move script and print the resulting view
fn replay(config: &TuiConfig, args: ReplayArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = config.game_options(args.descending, args.allow_branching);
    let report = run_replay(&args, options)?;
    info!(ignored = report.ignored.len(), "Replay complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_text(&report.view));
    }
    Ok(())
}
