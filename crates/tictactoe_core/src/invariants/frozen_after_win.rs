//! Frozen-after-win invariant: nothing is played on a won board.

use super::Invariant;
use crate::GameState;
use crate::rules::win::evaluate;

/// Invariant: no snapshot follows one that already has a winning line.
pub struct FrozenAfterWinInvariant;

impl Invariant<GameState> for FrozenAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|snap| evaluate(snap.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a completed line"
    }
}
