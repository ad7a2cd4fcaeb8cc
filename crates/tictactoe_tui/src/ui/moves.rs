//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tictactoe_core::GameView;

/// Renders the move list in display order.
///
/// The displayed step is bold; the selection arrow follows `selected`
/// and is only bright while the list has focus.
pub fn render_moves(f: &mut Frame, area: Rect, view: &GameView, selected: usize, focused: bool) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.description()).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Moves ({})", view.sort_label())),
        )
        .highlight_symbol("> ")
        .highlight_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}
