//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinResult {
    /// The winning mark.
    mark: Mark,
    /// The three positions of the line.
    line: [Position; 3],
}

impl WinResult {
    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates a board for a completed line.
///
/// Returns the first line in [`LINES`] order whose three squares hold the
/// same mark. On boards that could not arise in play (several complete
/// lines) that order decides which one is reported.
#[instrument]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.get(a).mark()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a))
            .then_some(WinResult { mark, line })
    })
}
