//! Contract-based validation for Neutrino.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, NeutrinoInvariants, Transition};
use super::rules::legality::{LegalMove, Slide};
use super::Board;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} must hold before applying action
/// - Postcondition: {Q(before, after)} must hold after applying action
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Evidence;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Evidence, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Contract for move actions.
///
/// Preconditions: every legality rule, in order.
///
/// Postconditions:
/// - exactly one neutral piece
/// - piece counts conserved
/// - phase advanced by one step or to a win
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    type Evidence = Slide;

    fn pre(board: &Board, action: &Move) -> Result<Slide, MoveError> {
        LegalMove::check(board, action)
    }

    #[instrument(skip_all)]
    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        NeutrinoInvariants::check_all(&Transition::new(before, after)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
