//! Single neutral invariant: exactly one neutral piece after every move.

use super::super::Cell;
use super::{Invariant, Transition};

/// Invariant: the board holds exactly one neutral piece.
pub struct SingleNeutralInvariant;

impl Invariant<Transition<'_>> for SingleNeutralInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        transition.after.count(Cell::Neutral) == 1
    }

    fn description() -> &'static str {
        "Exactly one neutral piece is on the board"
    }
}
