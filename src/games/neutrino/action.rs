//! First-class action types for Neutrino.
//!
//! Moves are domain events, not side effects. They represent the
//! player's intent and are validated independently of execution.

use super::position::Coordinate;
use super::types::{Cell, OutOfRange, ParseError, Phase, Player};
use serde::{Deserialize, Serialize};

/// A move: slide whatever sits on `from` to `to`.
///
/// The move does not say which piece is moving; the board does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Origin cell.
    pub from: Coordinate,
    /// Destination cell.
    pub to: Coordinate,
}

impl Move {
    /// Creates a move from `(from_x, from_y)` to `(to_x, to_y)`.
    pub fn new(from_x: i8, from_y: i8, to_x: i8, to_y: i8) -> Self {
        Self {
            from: Coordinate::new(from_x, from_y),
            to: Coordinate::new(to_x, to_y),
        }
    }

    /// Destination minus origin, widened so it cannot overflow.
    pub fn delta(&self) -> (i16, i16) {
        (
            i16::from(self.to.x) - i16::from(self.from.x),
            i16::from(self.to.y) - i16::from(self.from.y),
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl std::str::FromStr for Move {
    type Err = ParseError;

    /// Parses four integers `from_x from_y to_x to_y`.
    ///
    /// Separators may be any mix of whitespace, commas, parentheses and
    /// `->`, so `2 2 2 0`, `2,2 -> 2,0` and `(2,2) -> (2,0)` all work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .replace("->", " ")
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i8>()
                    .map_err(|_| ParseError::new(format!("'{}' is not a coordinate", part)))
            })
            .collect::<Result<Vec<i8>, ParseError>>()?;

        match numbers.as_slice() {
            [fx, fy, tx, ty] => Ok(Move::new(*fx, *fy, *tx, *ty)),
            _ => Err(ParseError::new(format!(
                "expected four coordinates, found {} in '{}'",
                numbers.len(),
                s.trim()
            ))),
        }
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The origin lies outside the board.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),

    /// The game is already over.
    #[display("Cannot move as the game has been won ({})", phase)]
    GameAlreadyWon {
        /// Terminal phase the game is in.
        phase: Phase,
    },

    /// Nothing to move at the origin.
    #[display("Move must start at a non-empty cell, {} is empty", from)]
    EmptyOrigin {
        /// The empty origin.
        from: Coordinate,
    },

    /// A player's piece was moved outside that player's piece-move phase.
    #[display("It must be {}'s piece move to move their piece ({})", player, phase)]
    WrongPlayerPiece {
        /// Owner of the piece at the origin.
        player: Player,
        /// Phase the game is in.
        phase: Phase,
    },

    /// The neutral piece was moved outside a neutral-move phase.
    #[display("The neutral piece may only move in a neutral-move phase ({})", phase)]
    WrongNeutralTurn {
        /// Phase the game is in.
        phase: Phase,
    },

    /// The move would put all five of a player's pieces back on their home row.
    #[display("{} cannot move all five pieces back on their home row", player)]
    HomeRowLockout {
        /// The moving player.
        player: Player,
    },

    /// The move is neither orthogonal nor diagonal.
    #[display("Piece must move in a straight line, delta was ({}, {})", dx, dy)]
    NonStraightMove {
        /// Horizontal delta.
        dx: i16,
        /// Vertical delta.
        dy: i16,
    },

    /// Origin and destination are the same cell.
    #[display("The move does not actually move any piece")]
    NullMove,

    /// Something stands in the way, or the destination is off the board.
    #[display("Cannot pass or land on {} at {}", blocker, at)]
    PathBlocked {
        /// First blocked cell along the path.
        at: Coordinate,
        /// What blocks it.
        blocker: Blocker,
    },

    /// The piece stopped before hitting an obstacle or the edge.
    #[display("Move does not continue until an obstacle is hit, {} is still free", next)]
    MustMoveUntilBlocked {
        /// The free cell just beyond the destination.
        next: Coordinate,
    },

    /// No neutral piece on the board: the game was set up incorrectly.
    #[display("Unable to locate the neutral piece")]
    NoNeutralOnBoard,

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// True for errors that indicate a broken setup rather than an
    /// ordinary illegal move.
    pub fn is_setup_violation(&self) -> bool {
        matches!(
            self,
            MoveError::NoNeutralOnBoard | MoveError::InvariantViolation(_)
        )
    }
}

impl std::error::Error for MoveError {}

impl From<OutOfRange> for MoveError {
    fn from(err: OutOfRange) -> Self {
        MoveError::OutOfRange(err)
    }
}

/// What stopped a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blocker {
    /// An occupied cell.
    Occupied(Cell),
    /// The edge of the board.
    Edge,
}

impl std::fmt::Display for Blocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Blocker::Occupied(cell) => write!(f, "the {}", cell),
            Blocker::Edge => write!(f, "the board edge"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!("2 2 2 0".parse::<Move>(), Ok(Move::new(2, 2, 2, 0)));
    }

    #[test]
    fn test_parse_arrow_and_parens() {
        assert_eq!("2,2 -> 2,0".parse::<Move>(), Ok(Move::new(2, 2, 2, 0)));
        assert_eq!("(3,3)->(0,0)".parse::<Move>(), Ok(Move::new(3, 3, 0, 0)));
        assert_eq!(
            Move::new(1, 4, 2, 3).to_string().parse::<Move>(),
            Ok(Move::new(1, 4, 2, 3))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("2 2 2".parse::<Move>().is_err());
        assert!("a b c d".parse::<Move>().is_err());
        assert!("1 2 3 4 5".parse::<Move>().is_err());
    }

    #[test]
    fn test_delta_does_not_overflow() {
        let m = Move::new(100, -100, -100, 100);
        assert_eq!(m.delta(), (-200, 200));
    }

    #[test]
    fn test_error_messages_are_specific() {
        let err = MoveError::PathBlocked {
            at: Coordinate::new(1, 1),
            blocker: Blocker::Occupied(Cell::Neutral),
        };
        assert_eq!(err.to_string(), "Cannot pass or land on the neutral piece at (1,1)");
        let err: MoveError = OutOfRange { x: 6, y: 1 }.into();
        assert!(err.to_string().contains("(6, 1)"));
        assert!(MoveError::NoNeutralOnBoard.is_setup_violation());
        assert!(!MoveError::NullMove.is_setup_violation());
    }
}
