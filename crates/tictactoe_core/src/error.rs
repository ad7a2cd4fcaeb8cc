//! Game error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Specific failure behind a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A jump named a step that is not in the history.
    #[display("Step {} is out of range (history has {} snapshots)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
