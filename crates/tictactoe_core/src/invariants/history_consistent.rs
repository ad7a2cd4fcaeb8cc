//! History consistency invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameState, Position, Square};

/// Invariant: every snapshot after the first differs from its predecessor
/// by one square going from empty to marked, and `last_moved` names it.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (prev, next) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|&pos| prev.get(pos) != next.get(pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    prev.get(*pos) == Square::Empty
                        && next.get(*pos) != Square::Empty
                        && *pair[1].last_moved() == Some(*pos)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square, recorded as its last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Snapshot};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for index in [4, 0, 8] {
            game.apply_move(index);
        }
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_two_cell_jump_violates() {
        let mut game = GameState::new();
        game.apply_move(4);
        game.history[1] = Snapshot::initial()
            .advance(Position::TopLeft, Mark::O)
            .advance(Position::Center, Mark::X);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_last_moved_violates() {
        let mut game = GameState::new();
        game.apply_move(4);
        let board = game.current().board().with_mark(Position::TopLeft, Mark::O);
        game.history
            .push(Snapshot::from_parts(board, Some(Position::BottomRight)));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
