//! Interactive terminal session.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tictactoe_core::GameOptions;
use tracing::{error, info, instrument};

use super::app::App;
use super::ui;

/// Runs the interactive UI until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all, fields(tick_rate = ?tick_rate))]
pub fn run_tui(options: GameOptions, tick_rate: Duration) -> Result<()> {
    info!(?options, "Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let res = enter_terminal(io::stdout())
        .and_then(|mut terminal| run_app(&mut terminal, App::new(options), tick_rate));
    restore_terminal(&mut io::stdout())?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Switches to the alternate screen and builds the ratatui terminal.
fn enter_terminal(mut stdout: Stdout) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode and the alternate screen.
///
/// Safe to call when setup stopped partway.
fn restore_terminal<W: Write>(out: &mut W) -> Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
    Ok(())
}

/// Draw, wait for a key, apply it; the view is rebuilt on every draw.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code)?;
        }
    }

    info!(moves = app.game().latest_step(), "Session ended");
    Ok(())
}
