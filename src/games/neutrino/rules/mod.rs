//! Game rules for Neutrino.
//!
//! Pure functions over a [`Board`](super::Board): legality, win detection
//! and move generation. Rules are kept apart from board storage so the
//! controller and the contract layer can compose them.

pub mod legality;
pub mod movegen;
pub mod win;

pub use legality::{is_legal, LegalMove, Slide};
pub use movegen::{legal_moves, slide_destination};
pub use win::{evaluate, is_blocked};
