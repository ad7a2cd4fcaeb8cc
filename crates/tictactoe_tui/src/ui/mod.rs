//! UI rendering using ratatui.
//!
//! Rendering is a pure projection: it takes the [`App`] by shared
//! reference and draws a freshly derived view.

mod board;
mod moves;

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::Status;

pub use board::render_board;
pub use moves::render_moves;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    render_board(f, body[0], &view, cursor);
    render_moves(f, body[1], &view, app.selected(), app.focus() == Focus::Moves);

    let mut status = view.status().to_string();
    if *view.is_draw() {
        status.push_str(" (board full)");
    }
    if let Some(notice) = app.notice() {
        status = format!("{} | {}", status, notice);
    }
    let status_color = match view.status() {
        Status::Won(_) => Color::Green,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(format!(
        "1-9/Enter: Move | Tab: Board/Moves | S: {} | R: Restart | Q: Quit",
        view.sort_label()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
