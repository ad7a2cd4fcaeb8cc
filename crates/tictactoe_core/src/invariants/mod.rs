//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked in debug builds and can be tested
//! independently.

mod alternating_marks;
mod frozen_after_win;
mod history_consistent;
mod initial_snapshot;
mod step_in_bounds;

pub use alternating_marks::AlternatingMarksInvariant;
pub use frozen_after_win::FrozenAfterWinInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use initial_snapshot::InitialSnapshotInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants, so a set is just a type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// All game invariants as a composable set.
pub type GameInvariants = (
    InitialSnapshotInvariant,
    HistoryConsistentInvariant,
    AlternatingMarksInvariant,
    StepInBoundsInvariant,
    FrozenAfterWinInvariant,
);
