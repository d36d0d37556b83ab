//! First-class invariants for Neutrino.
//!
//! Invariants are logical properties of a single move, stated over the
//! board before and after it. They are checked in debug builds and can be
//! tested independently.

use super::Board;

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

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants.
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

/// A board before and after one move.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// Board as it was when the move was submitted.
    pub before: &'a Board,
    /// Board after the move, with the new phase.
    pub after: &'a Board,
}

impl<'a> Transition<'a> {
    /// Pairs two boards.
    pub fn new(before: &'a Board, after: &'a Board) -> Self {
        Self { before, after }
    }
}

pub mod phase_progress;
pub mod piece_conservation;
pub mod single_neutral;

pub use phase_progress::PhaseProgressInvariant;
pub use piece_conservation::PieceConservationInvariant;
pub use single_neutral::SingleNeutralInvariant;

/// All Neutrino move invariants as a composable set.
pub type NeutrinoInvariants = (
    SingleNeutralInvariant,
    PieceConservationInvariant,
    PhaseProgressInvariant,
);
