//! Compact 64-bit board encoding.
//!
//! Layout, most significant bit first: 11 zero padding bits, then 25
//! two-bit cell codes in row-major order from (0,0) to (4,4), then the
//! three-bit phase code in the lowest bits.

use super::types::{Board, Cell, Phase, CELL_COUNT};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

const PHASE_BITS: u32 = 3;
const CELL_BITS: u32 = 2;
const PHASE_MASK: u64 = 0b111;
const CELL_MASK: u64 = 0b11;
const PADDING_SHIFT: u32 = PHASE_BITS + CELL_BITS * CELL_COUNT as u32;

/// Why a 64-bit value is not a valid board encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DecodeError {
    /// Phase field holds 6 or 7.
    #[display("Phase code {code} does not name a phase")]
    InvalidPhase {
        /// Raw phase bits.
        code: u8,
    },
    /// Bits above the cell fields are set.
    #[display("Padding bits must be zero, found {padding:#x}")]
    NonZeroPadding {
        /// Raw padding bits, shifted down.
        padding: u64,
    },
}

fn cell_shift(index: usize) -> u32 {
    PHASE_BITS + CELL_BITS * (CELL_COUNT - 1 - index) as u32
}

/// Packs a board and its phase into a `u64`.
#[instrument(skip(board), fields(phase = ?board.phase()))]
pub fn encode(board: &Board) -> u64 {
    let cells = board
        .cells()
        .iter()
        .enumerate()
        .fold(0u64, |acc, (index, cell)| {
            acc | (u64::from(cell.code()) << cell_shift(index))
        });
    cells | u64::from(board.phase().code())
}

/// Unpacks a value produced by [`encode`].
///
/// # Errors
///
/// Rejects phase codes outside `0..=5` and values with padding bits set.
#[instrument]
pub fn decode(value: u64) -> Result<Board, DecodeError> {
    let padding = value >> PADDING_SHIFT;
    if padding != 0 {
        return Err(DecodeError::NonZeroPadding { padding });
    }

    let code = (value & PHASE_MASK) as u8;
    let phase = Phase::from_code(code).ok_or(DecodeError::InvalidPhase { code })?;

    let cells: [Cell; CELL_COUNT] = std::array::from_fn(|index| {
        Cell::from_code(((value >> cell_shift(index)) & CELL_MASK) as u8)
    });
    debug!(%phase, "Board decoded");
    Ok(Board::from_cells(cells, phase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::neutrino::types::Player;

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(encode(&Board::new_empty()), 0);
    }

    #[test]
    fn test_field_positions() {
        let mut board = Board::new_empty();
        board.set(4, 4, Cell::Neutral).unwrap();
        board.set_phase(Phase::Player2PieceMove);
        assert_eq!(encode(&board), (0b11 << 3) | 3);

        let mut board = Board::new_empty();
        board.set(0, 0, Cell::Piece(Player::Two)).unwrap();
        assert_eq!(encode(&board), 0b10 << 51);
    }

    #[test]
    fn test_standard_board_round_trip() {
        let board = Board::new_standard();
        let value = encode(&board);
        assert_eq!(value >> 53, 0);
        assert_eq!(decode(value), Ok(board));
    }

    #[test]
    fn test_rejects_bad_phase() {
        assert_eq!(decode(6), Err(DecodeError::InvalidPhase { code: 6 }));
        assert_eq!(decode(7), Err(DecodeError::InvalidPhase { code: 7 }));
    }

    #[test]
    fn test_rejects_padding() {
        assert_eq!(
            decode(1 << 53),
            Err(DecodeError::NonZeroPadding { padding: 1 })
        );
        assert!(matches!(decode(u64::MAX), Err(DecodeError::NonZeroPadding { .. })));
    }
}
