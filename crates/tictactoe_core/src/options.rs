//! Per-game options.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Switches that change how a [`GameState`](crate::GameState) behaves.
///
/// Both default to off, which gives the classic rules: moves only on the
/// latest snapshot, move list in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Show the move list newest-first when the game starts.
    start_descending: bool,
    /// Allow moves while viewing a past snapshot, discarding later ones.
    allow_branching: bool,
}

impl GameOptions {
    /// Creates options with the classic defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the move list starts newest-first.
    pub fn with_start_descending(mut self, start_descending: bool) -> Self {
        self.start_descending = start_descending;
        self
    }

    /// Sets whether moves may branch from a past snapshot.
    pub fn with_allow_branching(mut self, allow_branching: bool) -> Self {
        self.allow_branching = allow_branching;
        self
    }
}
