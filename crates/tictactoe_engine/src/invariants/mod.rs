//! First-class invariants for a running game.
//!
//! Invariants are logical properties of a [`GameSnapshot`] that must hold
//! after every engine mutation. The engine checks them in debug builds and
//! they can be tested independently.

pub mod monotonic_board;
pub mod phase_consistent;
pub mod turn_order;

pub use monotonic_board::MonotonicBoardInvariant;
pub use phase_consistent::PhaseConsistentInvariant;
pub use turn_order::TurnOrderInvariant;

use crate::engine::GameSnapshot;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    MonotonicBoardInvariant,
    TurnOrderInvariant,
    PhaseConsistentInvariant,
);

/// Panics in debug builds if any game invariant is violated.
pub(crate) fn assert_invariants(snapshot: &GameSnapshot) {
    if cfg!(debug_assertions) {
        if let Err(violations) = GameInvariants::check_all(snapshot) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Invariant violation: {}", descriptions);
        }
    }
}
