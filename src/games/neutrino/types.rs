//! Core domain types for Neutrino.

use super::position::Coordinate;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 5;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 25;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player one (moves first, home row 0).
    One,
    /// Player two (home row 4).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row where this player's pieces start.
    pub fn home_row(self) -> i8 {
        match self {
            Player::One => 0,
            Player::Two => BOARD_SIZE - 1,
        }
    }

    /// The cell holding one of this player's pieces.
    pub fn piece(self) -> Cell {
        Cell::Piece(self)
    }

    /// Player number as printed to humans (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing on the cell.
    Empty,
    /// One of a player's five pieces.
    Piece(Player),
    /// The shared neutral piece.
    Neutral,
}

impl Cell {
    /// Two-bit code used by the compact encoding.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Piece(Player::One) => 1,
            Cell::Piece(Player::Two) => 2,
            Cell::Neutral => 3,
        }
    }

    /// Inverse of [`Cell::code`]. Only the low two bits are considered.
    pub fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0 => Cell::Empty,
            1 => Cell::Piece(Player::One),
            2 => Cell::Piece(Player::Two),
            _ => Cell::Neutral,
        }
    }

    /// Text symbol used by board rendering and scenario files.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(Player::One) => '1',
            Cell::Piece(Player::Two) => '2',
            Cell::Neutral => 'N',
        }
    }

    /// Parses a symbol written by [`Cell::symbol`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '0' => Some(Cell::Empty),
            '1' => Some(Cell::Piece(Player::One)),
            '2' => Some(Cell::Piece(Player::Two)),
            'N' | 'n' => Some(Cell::Neutral),
            _ => None,
        }
    }

    /// True for an empty cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "empty"),
            Cell::Piece(player) => write!(f, "{} piece", player),
            Cell::Neutral => write!(f, "neutral piece"),
        }
    }
}

/// Turn phase: whose turn it is and which kind of piece moves next.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Player one moves the neutral piece.
    Player1NeutralMove,
    /// Player one moves one of their own pieces.
    Player1PieceMove,
    /// Player two moves the neutral piece.
    Player2NeutralMove,
    /// Player two moves one of their own pieces.
    Player2PieceMove,
    /// Player one has won.
    Player1Win,
    /// Player two has won.
    Player2Win,
}

impl Phase {
    /// Neutral-move phase of the given player.
    pub fn neutral_move(player: Player) -> Self {
        match player {
            Player::One => Phase::Player1NeutralMove,
            Player::Two => Phase::Player2NeutralMove,
        }
    }

    /// Piece-move phase of the given player.
    pub fn piece_move(player: Player) -> Self {
        match player {
            Player::One => Phase::Player1PieceMove,
            Player::Two => Phase::Player2PieceMove,
        }
    }

    /// Terminal phase in which the given player has won.
    pub fn win(player: Player) -> Self {
        match player {
            Player::One => Phase::Player1Win,
            Player::Two => Phase::Player2Win,
        }
    }

    /// Player to move, or `None` once the game is won.
    pub fn mover(self) -> Option<Player> {
        match self {
            Phase::Player1NeutralMove | Phase::Player1PieceMove => Some(Player::One),
            Phase::Player2NeutralMove | Phase::Player2PieceMove => Some(Player::Two),
            Phase::Player1Win | Phase::Player2Win => None,
        }
    }

    /// Winner of a terminal phase.
    pub fn winner(self) -> Option<Player> {
        match self {
            Phase::Player1Win => Some(Player::One),
            Phase::Player2Win => Some(Player::Two),
            _ => None,
        }
    }

    /// True for the two win phases.
    pub fn is_terminal(self) -> bool {
        self.winner().is_some()
    }

    /// True when the neutral piece is the one to move.
    pub fn is_neutral_move(self) -> bool {
        matches!(self, Phase::Player1NeutralMove | Phase::Player2NeutralMove)
    }

    /// Player whose own-piece move is due, if any.
    pub fn piece_mover(self) -> Option<Player> {
        match self {
            Phase::Player1PieceMove => Some(Player::One),
            Phase::Player2PieceMove => Some(Player::Two),
            _ => None,
        }
    }

    /// Next phase in the turn cycle. Win phases are absorbing.
    pub fn next(self) -> Self {
        match self {
            Phase::Player1NeutralMove => Phase::Player1PieceMove,
            Phase::Player1PieceMove => Phase::Player2NeutralMove,
            Phase::Player2NeutralMove => Phase::Player2PieceMove,
            Phase::Player2PieceMove => Phase::Player1NeutralMove,
            terminal => terminal,
        }
    }

    /// Three-bit code used by the compact encoding.
    pub fn code(self) -> u8 {
        match self {
            Phase::Player1NeutralMove => 0,
            Phase::Player1PieceMove => 1,
            Phase::Player2NeutralMove => 2,
            Phase::Player2PieceMove => 3,
            Phase::Player1Win => 4,
            Phase::Player2Win => 5,
        }
    }

    /// Inverse of [`Phase::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Phase::Player1NeutralMove),
            1 => Some(Phase::Player1PieceMove),
            2 => Some(Phase::Player2NeutralMove),
            3 => Some(Phase::Player2PieceMove),
            4 => Some(Phase::Player1Win),
            5 => Some(Phase::Player2Win),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Player1NeutralMove => write!(f, "Player 1 to move the neutral piece"),
            Phase::Player1PieceMove => write!(f, "Player 1 to move one of their pieces"),
            Phase::Player2NeutralMove => write!(f, "Player 2 to move the neutral piece"),
            Phase::Player2PieceMove => write!(f, "Player 2 to move one of their pieces"),
            Phase::Player1Win => write!(f, "Player 1 wins"),
            Phase::Player2Win => write!(f, "Player 2 wins"),
        }
    }
}

/// A coordinate outside the 5x5 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinates must be between (0,0) and (4,4) both inclusive, was ({x}, {y})")]
pub struct OutOfRange {
    /// Column that was requested.
    pub x: i8,
    /// Row that was requested.
    pub y: i8,
}

/// First difference found when comparing two boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardDiff {
    /// Two cells differ.
    #[display("Difference in {at}: {left:?} and {right:?}")]
    Cell {
        /// Coordinate of the first differing cell (row-major scan).
        at: Coordinate,
        /// Cell on the left-hand board.
        left: Cell,
        /// Cell on the right-hand board.
        right: Cell,
    },
    /// Cells agree but the phases differ.
    #[display("Different phases {left:?} and {right:?}")]
    Phase {
        /// Phase of the left-hand board.
        left: Phase,
        /// Phase of the right-hand board.
        right: Phase,
    },
}

/// Text that could not be turned into a board or a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Parse error: {message}")]
pub struct ParseError {
    /// What went wrong.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 5x5 Neutrino board plus the phase of play.
///
/// The board only guarantees bounds-safe reads and writes. It never checks
/// whether a write is a legal move; that is the controller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed by `x + 5 * y`.
    cells: [Cell; CELL_COUNT],
    /// Current phase.
    phase: Phase,
}

impl Board {
    /// Creates an empty board with player one to move the neutral piece.
    pub fn new_empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            phase: Phase::Player1NeutralMove,
        }
    }

    /// Creates the standard starting position.
    ///
    /// Row 0 holds player one's five pieces, row 4 player two's, and the
    /// neutral piece sits in the centre.
    pub fn new_standard() -> Self {
        let mut board = Self::new_empty();
        for x in 0..BOARD_SIZE {
            board.cells[Self::index_unchecked(x, Player::One.home_row())] = Cell::Piece(Player::One);
            board.cells[Self::index_unchecked(x, Player::Two.home_row())] = Cell::Piece(Player::Two);
        }
        board.cells[Self::index_unchecked(2, 2)] = Cell::Neutral;
        board
    }

    /// Builds a board from raw cells in index order.
    pub fn from_cells(cells: [Cell; CELL_COUNT], phase: Phase) -> Self {
        Self { cells, phase }
    }

    /// Builds a board from row strings (row 0 first) in the notation of
    /// [`Cell::symbol`]. Whitespace inside a row is ignored.
    #[instrument(skip(rows))]
    pub fn from_rows<S: AsRef<str>>(rows: &[S], phase: Phase) -> Result<Self, ParseError> {
        if rows.len() != BOARD_SIZE as usize {
            return Err(ParseError::new(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Self::new_empty();
        board.phase = phase;
        for (y, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.as_ref().chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE as usize {
                return Err(ParseError::new(format!(
                    "row {} must have {} cells, found {}",
                    y,
                    BOARD_SIZE,
                    symbols.len()
                )));
            }
            for (x, symbol) in symbols.into_iter().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                    ParseError::new(format!("unknown cell '{}' at ({}, {})", symbol, x, y))
                })?;
                board.cells[x + BOARD_SIZE as usize * y] = cell;
            }
        }
        Ok(board)
    }

    fn index_unchecked(x: i8, y: i8) -> usize {
        x as usize + BOARD_SIZE as usize * y as usize
    }

    fn index(x: i8, y: i8) -> Result<usize, OutOfRange> {
        if !(0..BOARD_SIZE).contains(&x) || !(0..BOARD_SIZE).contains(&y) {
            return Err(OutOfRange { x, y });
        }
        Ok(Self::index_unchecked(x, y))
    }

    /// Gets the cell at `(x, y)`.
    pub fn get(&self, x: i8, y: i8) -> Result<Cell, OutOfRange> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Sets the cell at `(x, y)`, overwriting whatever was there.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> Result<(), OutOfRange> {
        let i = Self::index(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Gets the cell at a coordinate.
    pub fn cell(&self, at: Coordinate) -> Result<Cell, OutOfRange> {
        self.get(at.x, at.y)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Overrides the phase. Used for scenario setup; bypasses the rules.
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// All cells in index order (`x + 5 * y`).
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Finds the neutral piece, scanning row by row.
    pub fn locate_neutral(&self) -> Option<Coordinate> {
        self.cells
            .iter()
            .position(|c| *c == Cell::Neutral)
            .map(Coordinate::from_index)
    }

    /// Counts cells equal to `cell` on row `y`. Off-board rows count zero.
    pub fn count_on_row(&self, y: i8, cell: Cell) -> usize {
        (0..BOARD_SIZE)
            .filter(|&x| self.get(x, y) == Ok(cell))
            .count()
    }

    /// Counts cells equal to `cell` on the whole board.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Compares two boards, reporting the first difference.
    ///
    /// Cells are scanned row by row before the phase is compared.
    pub fn compare(&self, other: &Board) -> Result<(), BoardDiff> {
        for (i, (left, right)) in self.cells.iter().zip(other.cells.iter()).enumerate() {
            if left != right {
                return Err(BoardDiff::Cell {
                    at: Coordinate::from_index(i),
                    left: *left,
                    right: *right,
                });
            }
        }
        if self.phase != other.phase {
            return Err(BoardDiff::Phase {
                left: self.phase,
                right: other.phase,
            });
        }
        Ok(())
    }

    /// Renders the board with column and row labels for terminal play.
    pub fn display_with_coordinates(&self) -> String {
        let mut result = String::from("  x 0 1 2 3 4\ny\n");
        for y in 0..BOARD_SIZE {
            result.push_str(&format!("{}   ", y));
            for x in 0..BOARD_SIZE {
                result.push(' ');
                result.push(self.cells[Self::index_unchecked(x, y)].symbol());
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[Self::index_unchecked(x, y)].symbol())?;
            }
            if y < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let board = Board::new_standard();
        for x in 0..5 {
            assert_eq!(board.get(x, 0), Ok(Cell::Piece(Player::One)));
            assert_eq!(board.get(x, 4), Ok(Cell::Piece(Player::Two)));
            for y in 1..4 {
                let expected = if (x, y) == (2, 2) { Cell::Neutral } else { Cell::Empty };
                assert_eq!(board.get(x, y), Ok(expected));
            }
        }
        assert_eq!(board.phase(), Phase::Player1NeutralMove);
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new_empty();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.phase(), Phase::Player1NeutralMove);
        assert_eq!(board.locate_neutral(), None);
    }

    #[test]
    fn test_get_outside_board() {
        let board = Board::new_standard();
        assert_eq!(board.get(5, 0), Err(OutOfRange { x: 5, y: 0 }));
        assert_eq!(board.get(0, 5), Err(OutOfRange { x: 0, y: 5 }));
        assert_eq!(board.get(-1, 2), Err(OutOfRange { x: -1, y: 2 }));
    }

    #[test]
    fn test_set_outside_board_leaves_board_alone() {
        let mut board = Board::new_standard();
        assert!(board.set(7, 7, Cell::Neutral).is_err());
        assert_eq!(board, Board::new_standard());
    }

    #[test]
    fn test_set_overwrites() {
        let mut board = Board::new_standard();
        board.set(2, 2, Cell::Piece(Player::Two)).unwrap();
        assert_eq!(board.get(2, 2), Ok(Cell::Piece(Player::Two)));
    }

    #[test]
    fn test_compare_reports_first_difference() {
        let a = Board::new_standard();
        let mut b = Board::new_standard();
        b.set(3, 1, Cell::Piece(Player::One)).unwrap();
        b.set(4, 3, Cell::Piece(Player::Two)).unwrap();

        let diff = a.compare(&b).unwrap_err();
        assert_eq!(
            diff,
            BoardDiff::Cell {
                at: Coordinate::new(3, 1),
                left: Cell::Empty,
                right: Cell::Piece(Player::One),
            }
        );
        assert!(diff.to_string().contains("(3,1)"));
    }

    #[test]
    fn test_compare_reports_phase() {
        let a = Board::new_standard();
        let mut b = Board::new_standard();
        b.set_phase(Phase::Player2PieceMove);
        assert_eq!(
            a.compare(&b),
            Err(BoardDiff::Phase {
                left: Phase::Player1NeutralMove,
                right: Phase::Player2PieceMove,
            })
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_compare_checks_every_cell() {
        let a = Board::new_empty();
        let mut b = Board::new_empty();
        b.set(0, 0, Cell::Neutral).unwrap();
        assert!(a.compare(&b).is_err());
        assert!(a.compare(&Board::new_empty()).is_ok());
    }

    #[test]
    fn test_from_rows_matches_display() {
        let board = Board::new_standard();
        let text = board.to_string();
        let rows: Vec<&str> = text.lines().collect();
        let parsed = Board::from_rows(&rows, Phase::Player1NeutralMove).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Board::from_rows(&["....."], Phase::Player1NeutralMove).is_err());
        let rows = [".....", "....", "..N..", ".....", "....."];
        assert!(Board::from_rows(&rows, Phase::Player1NeutralMove).is_err());
        let rows = [".....", "..x..", "..N..", ".....", "....."];
        assert!(Board::from_rows(&rows, Phase::Player1NeutralMove).is_err());
    }

    #[test]
    fn test_phase_cycle() {
        assert_eq!(Phase::Player1NeutralMove.next(), Phase::Player1PieceMove);
        assert_eq!(Phase::Player1PieceMove.next(), Phase::Player2NeutralMove);
        assert_eq!(Phase::Player2NeutralMove.next(), Phase::Player2PieceMove);
        assert_eq!(Phase::Player2PieceMove.next(), Phase::Player1NeutralMove);
        assert_eq!(Phase::Player1Win.next(), Phase::Player1Win);
        assert_eq!(Phase::Player2Win.next(), Phase::Player2Win);
    }

    #[test]
    fn test_codes_round_trip() {
        use strum::IntoEnumIterator;
        for phase in Phase::iter() {
            assert_eq!(Phase::from_code(phase.code()), Some(phase));
        }
        assert_eq!(Phase::from_code(6), None);
        for code in 0..4 {
            assert_eq!(Cell::from_code(code).code(), code);
        }
    }
}
