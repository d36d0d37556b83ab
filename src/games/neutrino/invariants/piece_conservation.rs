//! Piece conservation invariant: moves relocate pieces, never create or remove them.

use super::super::{Cell, Player};
use super::{Invariant, Transition};

/// Invariant: every kind of piece appears as often after a move as before.
pub struct PieceConservationInvariant;

impl Invariant<Transition<'_>> for PieceConservationInvariant {
    fn holds(transition: &Transition<'_>) -> bool {
        [Cell::Piece(Player::One), Cell::Piece(Player::Two), Cell::Neutral]
            .into_iter()
            .all(|cell| transition.before.count(cell) == transition.after.count(cell))
    }

    fn description() -> &'static str {
        "Moves conserve the number of each kind of piece"
    }
}
