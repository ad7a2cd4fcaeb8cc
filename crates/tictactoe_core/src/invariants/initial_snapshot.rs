//! Initial snapshot invariant: the history opens on an empty board.

use super::Invariant;
use crate::GameState;

/// Invariant: `history[0]` is the empty board with no move recorded.
pub struct InitialSnapshotInvariant;

impl Invariant<GameState> for InitialSnapshotInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .first()
            .is_some_and(|first| first.is_initial() && first.board().occupied() == 0)
    }

    fn description() -> &'static str {
        "History starts with an empty board and no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position, Snapshot};

    #[test]
    fn test_new_game_holds() {
        assert!(InitialSnapshotInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_marked_opening_violates() {
        let mut game = GameState::new();
        game.history[0] = Snapshot::initial().advance(Position::Center, Mark::X);
        assert!(!InitialSnapshotInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!InitialSnapshotInvariant::holds(&game));
    }
}
