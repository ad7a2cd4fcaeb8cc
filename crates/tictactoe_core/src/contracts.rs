//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::IgnoredMove;
use super::game::GameState;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::rules::win::evaluate;
use super::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Reason an action is refused.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the displayed snapshot is the latest, unless branching is on.
pub struct AtLatestStep;

impl AtLatestStep {
    /// Validates that the move is made against the newest snapshot.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), IgnoredMove> {
        if game.is_at_latest() || *game.options().allow_branching() {
            Ok(())
        } else {
            Err(IgnoredMove::ViewingHistory {
                current: game.current_step(),
                latest: game.latest_step(),
            })
        }
    }
}

/// Precondition: the displayed board has no winning line.
pub struct NoWinner;

impl NoWinner {
    /// Validates that the game shown is still open.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), IgnoredMove> {
        match evaluate(game.current().board()) {
            Some(_) => Err(IgnoredMove::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Validates that `pos` is free on the displayed board.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), IgnoredMove> {
        if game.current().board().is_empty(pos) {
            Ok(())
        } else {
            Err(IgnoredMove::SquareOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Displayed snapshot is the latest (or branching is enabled)
/// - No winning line on the displayed board
/// - Target square is empty
///
/// Postconditions:
/// - All [`GameInvariants`] hold
/// - The history up to the step moved from is unchanged
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Rejection = IgnoredMove;

    fn pre(game: &GameState, pos: &Position) -> Result<(), IgnoredMove> {
        AtLatestStep::check(game)?;
        NoWinner::check(game)?;
        SquareIsEmpty::check(*pos, game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match GameInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let kept = before.current_step() + 1;
        if after.history().len() != kept + 1 || after.history()[..kept] != before.history()[..kept] {
            violations.push(InvariantViolation::new(
                "Move keeps the history up to the displayed step and appends one snapshot",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameOptions, Mark};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new();
        game.apply_move(4);
        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(IgnoredMove::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over_wins_over_occupied() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index);
        }
        assert_eq!(
            MoveContract::pre(&game, &Position::TopLeft),
            Err(IgnoredMove::GameOver)
        );
    }

    #[test]
    fn test_precondition_branching_lifts_latest_rule() {
        let mut game = GameState::with_options(GameOptions::new().with_allow_branching(true));
        game.apply_move(0);
        game.jump_to(0).expect("step 0 exists");
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        after.apply_move(4);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_rewritten_history() {
        let mut before = GameState::new();
        before.apply_move(0);
        let mut after = before.clone();
        after.apply_move(4);

        // Rewrite step 1 so it no longer matches what came before.
        after.history[1] = crate::Snapshot::initial().advance(Position::TopRight, Mark::X);

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
