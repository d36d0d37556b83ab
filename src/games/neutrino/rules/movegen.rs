//! Legal move generation.

use super::super::action::Move;
use super::super::direction::Direction;
use super::super::position::Coordinate;
use super::super::types::{Board, Cell};
use super::legality::{blocker_at, is_legal};
use tracing::instrument;

/// Where a piece on `from` ends up when it slides in `direction`.
///
/// Returns `None` when the first step is already blocked.
pub fn slide_destination(board: &Board, from: Coordinate, direction: Direction) -> Option<Coordinate> {
    let mut last = None;
    let mut n = 1;
    while let Some(next) = from.step(direction, n) {
        if blocker_at(board, Some(next)).is_err() {
            break;
        }
        last = Some(next);
        n += 1;
    }
    last
}

/// Whether the current phase lets `cell` move.
fn movable(board: &Board, cell: Cell) -> bool {
    let phase = board.phase();
    match cell {
        Cell::Empty => false,
        Cell::Neutral => phase.is_neutral_move(),
        Cell::Piece(player) => phase.piece_mover() == Some(player),
    }
}

/// Every legal move in the current position.
///
/// Each movable piece has at most one destination per direction, so the
/// list is short. Moves are ordered by origin (row-major) and then by
/// direction clockwise from north.
#[instrument(skip(board), fields(phase = ?board.phase()))]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    if board.phase().is_terminal() {
        return Vec::new();
    }

    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| movable(board, **cell))
        .map(|(index, _)| Coordinate::from_index(index))
        .flat_map(|from| {
            Direction::ALL
                .into_iter()
                .filter_map(move |direction| slide_destination(board, from, direction))
                .map(move |to| Move { from, to })
        })
        .filter(|mv| is_legal(board, mv).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::neutrino::types::{Phase, Player};

    #[test]
    fn test_opening_moves() {
        let moves = legal_moves(&Board::new_standard());
        let expected = vec![
            Move::new(2, 2, 2, 1),
            Move::new(2, 2, 3, 1),
            Move::new(2, 2, 4, 2),
            Move::new(2, 2, 3, 3),
            Move::new(2, 2, 2, 3),
            Move::new(2, 2, 1, 3),
            Move::new(2, 2, 0, 2),
            Move::new(2, 2, 1, 1),
        ];
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_every_generated_move_is_legal() {
        let mut board = Board::new_standard();
        board.set_phase(Phase::Player2PieceMove);
        let moves = legal_moves(&board);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert!(is_legal(&board, mv).is_ok(), "{mv} should be legal");
            assert_eq!(board.cell(mv.from), Ok(Cell::Piece(Player::Two)));
        }
    }

    #[test]
    fn test_won_game_has_no_moves() {
        let mut board = Board::new_standard();
        board.set_phase(Phase::Player1Win);
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn test_home_row_lockout_filtered() {
        let mut board = Board::new_empty();
        board.set_phase(Phase::Player1PieceMove);
        for x in [0, 2, 3, 4] {
            board.set(x, 0, Cell::Piece(Player::One)).unwrap();
        }
        board.set(1, 4, Cell::Piece(Player::One)).unwrap();
        board.set(3, 3, Cell::Neutral).unwrap();
        let moves = legal_moves(&board);
        assert!(!moves.contains(&Move::new(1, 4, 1, 0)));
        assert!(moves.contains(&Move::new(1, 4, 0, 4)));
    }
}
