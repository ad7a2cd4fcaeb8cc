//! Outcomes of move requests.
//!
//! A rejected move is not an error: the game stays as it was and the
//! caller learns why, which is enough for logging and UI hints.

use super::Position;
use serde::{Deserialize, Serialize};

/// Why a move request left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredMove {
    /// The index does not name a square (must be 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The view is on a past snapshot and branching is disabled.
    #[display("Viewing step {} of {}; jump to the latest move to play", current, latest)]
    ViewingHistory {
        /// Step currently displayed.
        current: usize,
        /// Index of the latest snapshot.
        latest: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winning line.
    #[display("Game is already over")]
    GameOver,
}

/// Result of asking the game to place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and a snapshot appended.
    Applied,
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }

    /// Returns the rejection reason, if any.
    pub fn ignored(&self) -> Option<IgnoredMove> {
        match self {
            MoveOutcome::Applied => None,
            MoveOutcome::Ignored(reason) => Some(*reason),
        }
    }
}
