//! Move legality checks for Neutrino.
//!
//! Each rule is a small check that can be tested on its own. [`LegalMove`]
//! runs them in a fixed order and stops at the first failure, so callers
//! always get the most fundamental reason a move is illegal.

use super::super::action::{Blocker, Move, MoveError};
use super::super::direction::{self, Direction};
use super::super::position::Coordinate;
use super::super::types::{Board, Cell, Player};
use tracing::{instrument, trace};

/// Straight path a legal move travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Direction of travel.
    pub direction: Direction,
    /// Number of cells travelled.
    pub steps: i16,
    /// What the piece stopped against.
    pub stopped_by: Blocker,
}

/// Reads the cell at `at`: `Ok` when it is on the board and empty, otherwise
/// the thing that blocks travel. Off-board cells are blocked by the edge,
/// never an error.
pub(crate) fn blocker_at(board: &Board, at: Option<Coordinate>) -> Result<(), Blocker> {
    match at.map(|c| board.cell(c)) {
        Some(Ok(Cell::Empty)) => Ok(()),
        Some(Ok(cell)) => Err(Blocker::Occupied(cell)),
        Some(Err(_)) | None => Err(Blocker::Edge),
    }
}

/// Precondition: the game has not been won.
pub struct GameNotWon;

impl GameNotWon {
    /// Fails with `GameAlreadyWon` in a terminal phase.
    pub fn check(board: &Board) -> Result<(), MoveError> {
        let phase = board.phase();
        if phase.is_terminal() {
            Err(MoveError::GameAlreadyWon { phase })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the origin holds a piece the current phase may move.
pub struct OriginMatchesPhase;

impl OriginMatchesPhase {
    /// Returns the moving cell.
    pub fn check(board: &Board, mv: &Move) -> Result<Cell, MoveError> {
        let phase = board.phase();
        let cell = board.cell(mv.from)?;
        match cell {
            Cell::Empty => Err(MoveError::EmptyOrigin { from: mv.from }),
            Cell::Piece(player) if phase.piece_mover() != Some(player) => {
                Err(MoveError::WrongPlayerPiece { player, phase })
            }
            Cell::Neutral if !phase.is_neutral_move() => Err(MoveError::WrongNeutralTurn { phase }),
            _ => Ok(cell),
        }
    }
}

/// Precondition: a player may never have all five of their own pieces
/// back on their home row.
///
/// Only fires for a piece arriving from another row while four of the
/// player's own pieces are already home. Moves along the home row and
/// opponent pieces on it are unaffected.
pub struct HomeRowRule;

impl HomeRowRule {
    /// Fails with `HomeRowLockout` for a fifth piece returning home.
    pub fn check(board: &Board, mv: &Move, moving: Cell) -> Result<(), MoveError> {
        let Cell::Piece(player) = moving else {
            return Ok(());
        };
        let home = player.home_row();
        if mv.to.y == home && mv.from.y != home && Self::pieces_home(board, player) == 4 {
            return Err(MoveError::HomeRowLockout { player });
        }
        Ok(())
    }

    /// Number of the player's own pieces on their home row.
    pub fn pieces_home(board: &Board, player: Player) -> usize {
        board.count_on_row(player.home_row(), player.piece())
    }
}

/// Precondition: the move is orthogonal or diagonal and goes somewhere.
pub struct StraightLine;

impl StraightLine {
    /// Returns the direction and number of steps.
    pub fn check(mv: &Move) -> Result<(Direction, i16), MoveError> {
        let (dx, dy) = mv.delta();
        if !direction::is_straight(dx, dy) {
            return Err(MoveError::NonStraightMove { dx, dy });
        }
        let direction = Direction::from_delta(dx, dy).ok_or(MoveError::NullMove)?;
        Ok((direction, direction::step_count(dx, dy)))
    }
}

/// Precondition: every cell from the first step up to and including the
/// destination is on the board and empty.
pub struct PathClear;

impl PathClear {
    /// Fails with `PathBlocked` at the first obstacle.
    pub fn check(board: &Board, mv: &Move, direction: Direction, steps: i16) -> Result<(), MoveError> {
        for n in 1..=steps {
            let at = mv.from.step(direction, n);
            if let Err(blocker) = blocker_at(board, at) {
                return Err(MoveError::PathBlocked {
                    at: at.unwrap_or(mv.to),
                    blocker,
                });
            }
        }
        Ok(())
    }
}

/// Precondition: the piece slides as far as it can.
///
/// The cell one step past the destination must be occupied or off the
/// board.
pub struct SlidesUntilBlocked;

impl SlidesUntilBlocked {
    /// Returns what the piece stops against.
    pub fn check(board: &Board, mv: &Move, direction: Direction, steps: i16) -> Result<Blocker, MoveError> {
        let beyond = mv.from.step(direction, steps + 1);
        match blocker_at(board, beyond) {
            Ok(()) => Err(MoveError::MustMoveUntilBlocked {
                next: beyond.unwrap_or(mv.to),
            }),
            Err(blocker) => Ok(blocker),
        }
    }
}

/// Composite precondition: all rules, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates a move and returns the path it takes.
    #[instrument(skip(board), fields(phase = ?board.phase()))]
    pub fn check(board: &Board, mv: &Move) -> Result<Slide, MoveError> {
        GameNotWon::check(board)?;
        let moving = OriginMatchesPhase::check(board, mv)?;
        HomeRowRule::check(board, mv, moving)?;
        let (direction, steps) = StraightLine::check(mv)?;
        PathClear::check(board, mv, direction, steps)?;
        let stopped_by = SlidesUntilBlocked::check(board, mv, direction, steps)?;
        trace!(?direction, steps, %stopped_by, "Move is legal");
        Ok(Slide {
            direction,
            steps,
            stopped_by,
        })
    }
}

/// Checks whether `mv` is legal on `board`.
pub fn is_legal(board: &Board, mv: &Move) -> Result<(), MoveError> {
    LegalMove::check(board, mv).map(|_| ())
}
