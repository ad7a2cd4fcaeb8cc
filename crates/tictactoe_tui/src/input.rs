//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the edges; other keys leave it where it is.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row() - 1, cursor.column() - 1);

    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, column)),
        KeyCode::Down => Some((row + 1, column)),
        KeyCode::Left => column.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, column + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_coords(r, c))
        .unwrap_or(cursor)
}

/// Maps a digit key 1-9 to its square.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}
