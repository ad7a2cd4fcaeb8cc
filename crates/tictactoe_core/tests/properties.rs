//! Property tests for win detection and history transitions.

use proptest::prelude::*;
use tictactoe_core::invariants::{GameInvariants, InvariantSet};
use tictactoe_core::rules::LINES;
use tictactoe_core::{Board, GameState, Mark, Square, evaluate};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::X)),
        Just(Square::Occupied(Mark::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn line_complete(board: &Board, line: &[tictactoe_core::Position; 3]) -> bool {
    let first = board.get(line[0]);
    first != Square::Empty && line.iter().all(|&pos| board.get(pos) == first)
}

proptest! {
    #[test]
    fn evaluate_matches_first_complete_line(board in board()) {
        let expected = LINES.iter().find(|line| line_complete(&board, line));

        match (evaluate(&board), expected) {
            (None, None) => {}
            (Some(result), Some(line)) => {
                prop_assert_eq!(result.line(), line);
                prop_assert_eq!(Square::Occupied(*result.mark()), board.get(line[0]));
            }
            (got, want) => prop_assert!(false, "evaluate gave {:?}, expected line {:?}", got, want),
        }
    }

    #[test]
    fn evaluate_is_pure(board in board()) {
        let copy = board.clone();
        let first = evaluate(&board);
        prop_assert_eq!(evaluate(&board), first);
        prop_assert_eq!(board, copy);
    }

    #[test]
    fn random_clicks_keep_invariants(clicks in prop::collection::vec(0usize..12, 0..30)) {
        let mut game = GameState::new();
        let mut applied = 0;

        for index in clicks {
            let before = game.clone();
            if game.apply_move(index).is_applied() {
                applied += 1;
                prop_assert_eq!(game.next_mark(), Mark::for_step(applied));
            } else {
                prop_assert_eq!(&game, &before);
            }
            prop_assert!(GameInvariants::check_all(&game).is_ok());
        }

        prop_assert_eq!(game.history().len(), applied + 1);
        prop_assert_eq!(game.current_step(), applied);
    }

    #[test]
    fn jump_follows_parity(
        clicks in prop::collection::vec(0usize..9, 0..9),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut game = GameState::new();
        for index in clicks {
            game.apply_move(index);
        }
        let history = game.history().to_vec();
        let step = pick.index(history.len());

        game.jump_to(step).expect("index drawn from the history");

        prop_assert_eq!(game.current_step(), step);
        prop_assert_eq!(game.next_mark(), if step % 2 == 0 { Mark::X } else { Mark::O });
        prop_assert_eq!(game.history(), history.as_slice());
        prop_assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn double_toggle_is_identity(
        clicks in prop::collection::vec(0usize..9, 0..9),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut game = GameState::new();
        for index in clicks {
            game.apply_move(index);
        }
        let step = pick.index(game.history().len());
        game.jump_to(step).expect("index drawn from the history");

        let before = game.view();
        game.toggle_sort_order();
        let flipped = game.view();
        game.toggle_sort_order();

        prop_assert_eq!(game.view(), before.clone());
        let forward: Vec<usize> = before.moves().iter().map(|e| *e.label()).collect();
        let mut backward: Vec<usize> = flipped.moves().iter().map(|e| *e.label()).collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(flipped.current_row().map(|row| *flipped.moves()[row].label()), Some(step));
    }
}
