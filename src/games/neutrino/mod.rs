//! Neutrino: a 5x5 sliding-piece game with a shared neutral piece.
//!
//! Each turn has two halves. The player to move first slides the neutral
//! piece, then one of their own five pieces. Every slide goes in a straight
//! line (orthogonal or diagonal) until the next cell is occupied or off the
//! board. A player wins when the neutral piece reaches the opponent's home
//! row, or when their piece move leaves it with nowhere to go.

mod action;
pub mod codec;
mod contracts;
mod controller;
mod direction;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Blocker, Move, MoveError};
pub use codec::{decode, encode, DecodeError};
pub use contracts::{Contract, MoveContract};
pub use controller::{GameController, MoveListener, PhaseListener};
pub use direction::Direction;
pub use position::Coordinate;
pub use rules::{evaluate, is_blocked, is_legal, legal_moves, slide_destination, LegalMove, Slide};
pub use snapshot::GameSnapshot;
pub use types::{
    Board, BoardDiff, Cell, OutOfRange, ParseError, Phase, Player, BOARD_SIZE, CELL_COUNT,
};
