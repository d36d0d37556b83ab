//! Serializable summary of a game.

use super::action::Move;
use super::codec;
use super::controller::GameController;
use super::types::{Board, ParseError, Phase};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything a viewer needs to show a game, as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board rows, row 0 first, in cell symbol notation.
    pub rows: Vec<String>,
    /// Current phase.
    pub phase: Phase,
    /// Compact encoding of board and phase.
    pub encoded: u64,
    /// Moves played so far.
    pub history: Vec<Move>,
    /// Human-readable phase, such as `Player 2 wins`.
    pub status: String,
}

impl GameSnapshot {
    /// Captures a board with no history.
    #[instrument(skip(board), fields(phase = ?board.phase()))]
    pub fn of_board(board: &Board) -> Self {
        Self::capture(board, &[])
    }

    fn capture(board: &Board, history: &[Move]) -> Self {
        let phase = board.phase();
        Self {
            rows: board.to_string().lines().map(str::to_string).collect(),
            phase,
            encoded: codec::encode(board),
            history: history.to_vec(),
            status: phase.to_string(),
        }
    }

    /// Rebuilds the board from the snapshot's rows and phase.
    pub fn board(&self) -> Result<Board, ParseError> {
        Board::from_rows(&self.rows, self.phase)
    }
}

impl From<&GameController> for GameSnapshot {
    fn from(game: &GameController) -> Self {
        Self::capture(game.board(), game.history())
    }
}
