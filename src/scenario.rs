//! Scenario files: a starting position, a phase and a list of moves.
//!
//! ```toml
//! start = "custom"
//! rows = ["1.1.1", "..2..", "..N..", ".....", "2.2.2"]
//! phase = "player1-neutral-move"
//! moves = ["2,2 -> 2,3"]
//! ```

use crate::games::neutrino::{Board, Move, Phase};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which board a scenario starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Start {
    /// Five pieces per home row and the neutral piece in the centre.
    #[default]
    Standard,
    /// Nothing on the board.
    Empty,
    /// Cells given by `rows`.
    Custom,
}

/// A starting position plus moves to play from it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Starting layout.
    #[serde(default)]
    start: Start,

    /// Row strings for a custom start, row 0 first.
    #[serde(default)]
    rows: Vec<String>,

    /// Phase of the starting board.
    #[serde(default = "default_phase")]
    phase: Phase,

    /// Moves in text form, such as `2,2 -> 2,0`.
    #[serde(default)]
    moves: Vec<String>,
}

fn default_phase() -> Phase {
    Phase::Player1NeutralMove
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            start: Start::Standard,
            rows: Vec::new(),
            phase: default_phase(),
            moves: Vec::new(),
        }
    }
}

impl Scenario {
    /// Loads a scenario from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading scenario from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read scenario file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let scenario = Self::from_toml_str(&content)?;
        info!(start = ?scenario.start, moves = scenario.moves.len(), "Scenario loaded");
        Ok(scenario)
    }

    /// Parses a scenario from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse scenario: {}", e)))
    }

    /// Builds the starting board.
    #[instrument(skip(self), fields(start = ?self.start, phase = ?self.phase))]
    pub fn board(&self) -> Result<Board, ConfigError> {
        if self.start != Start::Custom && !self.rows.is_empty() {
            return Err(ConfigError::new(
                "rows are only read when start = \"custom\"".to_string(),
            ));
        }

        let mut board = match self.start {
            Start::Standard => Board::new_standard(),
            Start::Empty => Board::new_empty(),
            Start::Custom => Board::from_rows(&self.rows, self.phase)
                .map_err(|e| ConfigError::new(format!("Invalid custom board: {}", e)))?,
        };
        board.set_phase(self.phase);
        Ok(board)
    }

    /// Parses the move list.
    #[instrument(skip(self), fields(count = self.moves.len()))]
    pub fn parsed_moves(&self) -> Result<Vec<Move>, ConfigError> {
        self.moves
            .iter()
            .enumerate()
            .map(|(i, text)| {
                text.parse::<Move>()
                    .map_err(|e| ConfigError::new(format!("Move {} ('{}'): {}", i + 1, text, e)))
            })
            .collect()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::neutrino::{Cell, Player};

    #[test]
    fn test_empty_file_is_standard_game() {
        let scenario = Scenario::from_toml_str("").unwrap();
        assert_eq!(*scenario.start(), Start::Standard);
        assert_eq!(scenario.board().unwrap(), Board::new_standard());
        assert!(scenario.parsed_moves().unwrap().is_empty());
    }

    #[test]
    fn test_custom_board_and_moves() {
        let scenario = Scenario::from_toml_str(
            r#"
            start = "custom"
            rows = [".....", ".N...", ".....", "...1.", "....."]
            phase = "player1-piece-move"
            moves = ["3,3 -> 2,2"]
            "#,
        )
        .unwrap();
        let board = scenario.board().unwrap();
        assert_eq!(board.get(1, 1), Ok(Cell::Neutral));
        assert_eq!(board.get(3, 3), Ok(Cell::Piece(Player::One)));
        assert_eq!(board.phase(), Phase::Player1PieceMove);
        assert_eq!(scenario.parsed_moves().unwrap(), vec![Move::new(3, 3, 2, 2)]);
    }

    #[test]
    fn test_rows_without_custom_start_rejected() {
        let scenario = Scenario::from_toml_str(r#"rows = ["....."]"#).unwrap();
        assert!(scenario.board().is_err());
    }

    #[test]
    fn test_bad_move_names_its_position() {
        let scenario = Scenario::from_toml_str(r#"moves = ["2,2 -> 2,3", "two two"]"#).unwrap();
        let err = scenario.parsed_moves().unwrap_err();
        assert!(err.message.starts_with("Move 2"), "{}", err.message);
    }

    #[test]
    fn test_unknown_phase_rejected() {
        assert!(Scenario::from_toml_str(r#"phase = "player3-piece-move""#).is_err());
    }
}
