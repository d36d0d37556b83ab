//! Win detection logic for Neutrino.

use super::super::action::MoveError;
use super::super::position::Coordinate;
use super::super::types::{Board, Player};
use super::legality::blocker_at;
use tracing::{debug, instrument};

/// Checks whether the neutral piece is surrounded.
///
/// Every neighbour must be occupied or off the board.
pub fn is_blocked(board: &Board, at: Coordinate) -> bool {
    at.neighbours().all(|n| blocker_at(board, Some(n)).is_err())
}

/// Decides whether the position on `board` has a winner.
///
/// Called after a move has been applied but before the phase advances, so
/// `board.phase()` is still the phase of the move just made:
///
/// - neutral on row 0: player two wins;
/// - neutral on row 4: player one wins;
/// - neutral surrounded: the player whose piece move just trapped it wins.
///
/// # Errors
///
/// `NoNeutralOnBoard` when the board has no neutral piece at all.
#[instrument(skip(board), fields(phase = ?board.phase()))]
pub fn evaluate(board: &Board) -> Result<Option<Player>, MoveError> {
    let neutral = board.locate_neutral().ok_or(MoveError::NoNeutralOnBoard)?;

    if neutral.y == Player::One.home_row() {
        debug!(%neutral, "Neutral reached player one's home row");
        return Ok(Some(Player::Two));
    }
    if neutral.y == Player::Two.home_row() {
        debug!(%neutral, "Neutral reached player two's home row");
        return Ok(Some(Player::One));
    }

    if is_blocked(board, neutral) {
        let winner = board.phase().piece_mover();
        debug!(%neutral, ?winner, "Neutral is blocked");
        return Ok(winner);
    }

    Ok(None)
}
