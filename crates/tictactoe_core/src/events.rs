//! Inbound events a front-end forwards to the game.

use serde::{Deserialize, Serialize};

/// A discrete user action.
///
/// Front-ends translate their own input (clicks, keys) into these and pass
/// them to [`GameState::handle`](crate::GameState::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A board square was clicked (index 0-8).
    CellClicked(usize),
    /// A move-list entry was clicked; carries the entry's label.
    HistoryEntryClicked(usize),
    /// The sort-order toggle was clicked.
    ToggleSortClicked,
    /// The restart control was clicked.
    ResetClicked,
}
