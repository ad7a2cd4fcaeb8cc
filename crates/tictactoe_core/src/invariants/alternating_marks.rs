//! Alternating marks invariant: X, O, X, O, ... by step parity.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: the mark placed to produce step k is X for odd k and O for
/// even k, and `next_mark` matches the parity of the displayed step.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let placed_in_turn = game.history().iter().enumerate().skip(1).all(|(step, snap)| {
            let expected = Mark::for_step(step - 1);
            snap.last_moved()
                .and_then(|pos| snap.board().get(pos).mark())
                == Some(expected)
        });

        placed_in_turn && game.next_mark() == Mark::for_step(game.current_step())
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ... and the next mark follows step parity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingMarksInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_jump_back() {
        let mut game = GameState::new();
        for index in [0, 4, 8] {
            game.apply_move(index);
        }
        game.jump_to(2).expect("step 2 exists");
        assert_eq!(game.next_mark(), Mark::X);
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_stale_next_mark_violates() {
        let mut game = GameState::new();
        game.apply_move(0);
        game.next_mark = Mark::X;
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
