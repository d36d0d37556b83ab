//! Strictly Neutrino - a rules engine for the Neutrino board game
//!
//! Neutrino is played on a 5x5 board by two players with five pieces each
//! and one shared neutral piece. Every turn the player first slides the
//! neutral piece, then one of their own pieces, always as far as it will
//! go in a straight line.
//!
//! # Architecture
//!
//! - **Board**: bounds-checked cells plus the current phase
//! - **Rules**: ordered legality checks, win detection, move generation
//! - **Controller**: applies moves, advances phases, notifies observers
//! - **Codec**: 64-bit board encoding
//! - **Scenario**: TOML files describing a position and moves
//!
//! # Example
//!
//! ```
//! use strictly_neutrino::{GameController, Move, Phase};
//!
//! let mut game = GameController::standard();
//! let phase = game.make_move(Move::new(2, 2, 3, 3))?;
//! assert_eq!(phase, Phase::Player1PieceMove);
//!
//! let encoded = strictly_neutrino::encode(game.board());
//! assert_eq!(strictly_neutrino::decode(encoded)?, *game.board());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod scenario;
mod terminal;

// Crate-level exports - Board and pieces
pub use games::neutrino::{
    Board, BoardDiff, Cell, Coordinate, Direction, OutOfRange, ParseError, Phase, Player,
    BOARD_SIZE, CELL_COUNT,
};

// Crate-level exports - Moves and rules
pub use games::neutrino::{
    evaluate, is_blocked, is_legal, legal_moves, slide_destination, Blocker, LegalMove, Move,
    MoveError, Slide,
};

// Crate-level exports - Controller and contracts
pub use games::neutrino::{
    Contract, GameController, GameSnapshot, MoveContract, MoveListener, PhaseListener,
};

// Crate-level exports - Invariants
pub use games::neutrino::invariants::{
    Invariant, InvariantSet, InvariantViolation, NeutrinoInvariants, Transition,
};

// Crate-level exports - Codec
pub use games::neutrino::{decode, encode, DecodeError};

// Crate-level exports - Scenario files
pub use scenario::{ConfigError, Scenario, Start};

// Crate-level exports - Terminal play
pub use terminal::{play, SessionEnd};
