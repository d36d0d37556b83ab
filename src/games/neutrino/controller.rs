//! Turn controller for Neutrino.
//!
//! The controller owns one game's board. It is the only place a move is
//! applied: validate, apply, look for a winner, advance the phase, then
//! tell whoever is listening. A rejected move leaves the board untouched.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::types::{Board, Cell, Phase, Player};
use tracing::{debug, error, info, instrument, warn};

/// Callback run after each successful move.
pub type MoveListener = Box<dyn FnMut(&Move)>;

/// Callback run with the new phase after each successful move.
pub type PhaseListener = Box<dyn FnMut(Phase)>;

/// Caller-owned game: a board plus move history and observers.
pub struct GameController {
    board: Board,
    history: Vec<Move>,
    move_listeners: Vec<MoveListener>,
    phase_listeners: Vec<PhaseListener>,
}

impl GameController {
    /// Starts controlling `board` from its current phase.
    #[instrument(skip(board), fields(phase = ?board.phase()))]
    pub fn new(board: Board) -> Self {
        if board.locate_neutral().is_none() {
            warn!("Board has no neutral piece; every move will be refused");
        }
        Self {
            board,
            history: Vec::new(),
            move_listeners: Vec::new(),
            phase_listeners: Vec::new(),
        }
    }

    /// Starts a game from the standard position.
    pub fn standard() -> Self {
        Self::new(Board::new_standard())
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board for scenario setup. Writes here bypass every rule.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Gives the board back.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.board.phase()
    }

    /// Winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.board.phase().winner()
    }

    /// True once a player has won.
    pub fn is_over(&self) -> bool {
        self.board.phase().is_terminal()
    }

    /// Moves applied through this controller, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Legal moves in the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board)
    }

    /// Registers a callback invoked with every applied move.
    pub fn on_move(&mut self, listener: impl FnMut(&Move) + 'static) {
        self.move_listeners.push(Box::new(listener));
    }

    /// Registers a callback invoked with the phase after every applied move.
    pub fn on_phase(&mut self, listener: impl FnMut(Phase) + 'static) {
        self.phase_listeners.push(Box::new(listener));
    }

    /// Validates and applies a move, returning the new phase.
    ///
    /// The move is applied to a copy of the board which replaces the real
    /// one only once every check has passed, so on any error the cells and
    /// phase are exactly as they were.
    ///
    /// # Errors
    ///
    /// - any legality failure from [`rules::is_legal`]
    /// - `NoNeutralOnBoard` when the game was set up without a neutral piece
    /// - `InvariantViolation` (debug builds) when a postcondition fails
    #[instrument(skip(self), fields(phase = ?self.board.phase()))]
    pub fn make_move(&mut self, mv: Move) -> Result<Phase, MoveError> {
        let before = self.board;

        let slide = MoveContract::pre(&before, &mv).inspect_err(|e| {
            warn!(%mv, error = %e, "Move rejected");
        })?;

        let mut after = before;
        let moving = before.cell(mv.from)?;
        after.set(mv.to.x, mv.to.y, moving)?;
        after.set(mv.from.x, mv.from.y, Cell::Empty)?;

        let winner = rules::evaluate(&after).inspect_err(|e| {
            error!(%mv, error = %e, "Game was set up without a neutral piece");
        })?;

        let phase = match winner {
            Some(player) => Phase::win(player),
            None => before.phase().next(),
        };
        after.set_phase(phase);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &after)?;

        self.board = after;
        self.history.push(mv);
        debug!(%mv, ?slide, ?phase, "Move applied");
        if let Some(player) = winner {
            info!(%player, moves = self.history.len(), "Game won");
        }

        for listener in &mut self.move_listeners {
            listener(&mv);
        }
        for listener in &mut self.phase_listeners {
            listener(phase);
        }

        Ok(phase)
    }

    /// Replays `moves` from `board`, stopping at the first rejected move.
    #[instrument(skip(board, moves), fields(count = moves.len()))]
    pub fn replay(board: Board, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new(board);
        for mv in moves {
            game.make_move(*mv)?;
        }
        Ok(game)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("board", &self.board)
            .field("history", &self.history)
            .field("move_listeners", &self.move_listeners.len())
            .field("phase_listeners", &self.phase_listeners.len())
            .finish()
    }
}
