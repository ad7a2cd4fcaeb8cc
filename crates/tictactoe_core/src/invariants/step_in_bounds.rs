//! Step bounds invariant: the cursor always points into the history.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step` is a valid history index.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step is a valid history index"
    }
}
