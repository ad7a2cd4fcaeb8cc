//! Board snapshots stored in the game history.

use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A board state plus the move that produced it.
///
/// Only the opening snapshot has no `last_moved` cell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Cell filled by the move that produced this snapshot.
    last_moved: Option<Position>,
}

impl Snapshot {
    /// The empty board that opens every game.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_moved: None,
        }
    }

    /// Returns the snapshot that follows this one after `mark` is placed at `pos`.
    ///
    /// The square is not checked; callers validate moves first.
    #[instrument(skip(self))]
    pub fn advance(&self, pos: Position, mark: Mark) -> Self {
        Self {
            board: self.board.with_mark(pos, mark),
            last_moved: Some(pos),
        }
    }

    /// Builds a snapshot without checking that the parts agree.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, last_moved: Option<Position>) -> Self {
        Self { board, last_moved }
    }

    /// Whether this is the opening snapshot.
    pub fn is_initial(&self) -> bool {
        self.last_moved.is_none()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
