//! Property tests for move validation and the board codec.

use proptest::prelude::*;
use strictly_neutrino::{
    Board, CELL_COUNT, Cell, GameController, Move, MoveError, Phase, Player, decode, encode,
    is_legal, legal_moves,
};

fn any_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Piece(Player::One)),
        Just(Cell::Piece(Player::Two)),
        Just(Cell::Neutral),
    ]
}

fn any_phase() -> impl Strategy<Value = Phase> {
    (0u8..6).prop_map(|code| Phase::from_code(code).unwrap())
}

fn any_board() -> impl Strategy<Value = Board> {
    (prop::array::uniform25(any_cell()), any_phase())
        .prop_map(|(cells, phase)| Board::from_cells(cells, phase))
}

/// Boards reached from the standard position by up to `max` legal moves.
fn played_board(max: usize) -> impl Strategy<Value = Board> {
    prop::collection::vec(any::<prop::sample::Index>(), 0..max).prop_map(|choices| {
        let mut game = GameController::standard();
        for choice in choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            game.make_move(*choice.get(&moves)).unwrap();
        }
        *game.board()
    })
}

fn any_move() -> impl Strategy<Value = Move> {
    (-2i8..7, -2i8..7, -2i8..7, -2i8..7).prop_map(|(fx, fy, tx, ty)| Move::new(fx, fy, tx, ty))
}

proptest! {
    #[test]
    fn rejected_moves_leave_the_board_alone(board in any_board(), mv in any_move()) {
        let mut game = GameController::new(board);
        if game.make_move(mv).is_err() {
            prop_assert_eq!(game.board().compare(&board), Ok(()));
            prop_assert!(game.history().is_empty());
        }
    }

    #[test]
    fn pieces_only_move_in_their_owners_piece_phase(
        board in played_board(30),
        mv in any_move(),
    ) {
        let Ok(Cell::Piece(owner)) = board.cell(mv.from) else {
            return Ok(());
        };
        let phase = board.phase();
        if phase.is_terminal() {
            prop_assert!(
                matches!(is_legal(&board, &mv), Err(MoveError::GameAlreadyWon { .. })),
                "{} accepted after the game was won",
                mv
            );
        } else if phase != Phase::piece_move(owner) {
            prop_assert!(
                matches!(
                    is_legal(&board, &mv),
                    Err(MoveError::WrongPlayerPiece { player, .. }) if player == owner
                ),
                "{} moved {}'s piece during {:?}",
                mv,
                owner,
                phase
            );
        }
    }

    #[test]
    fn neutral_only_moves_in_a_neutral_phase(
        board in played_board(30),
        mv in any_move(),
        piece_phase in prop_oneof![Just(Phase::Player1PieceMove), Just(Phase::Player2PieceMove)],
    ) {
        let Some(neutral) = board.locate_neutral() else {
            return Ok(());
        };
        let mut board = board;
        board.set_phase(piece_phase);
        let mv = Move { from: neutral, to: mv.to };
        prop_assert_eq!(
            is_legal(&board, &mv),
            Err(MoveError::WrongNeutralTurn { phase: piece_phase })
        );
    }

    #[test]
    fn null_moves_are_never_legal(board in played_board(30), index in 0usize..CELL_COUNT) {
        let x = (index % 5) as i8;
        let y = (index / 5) as i8;
        let result = is_legal(&board, &Move::new(x, y, x, y));
        prop_assert!(result.is_err());
        if board.get(x, y).is_ok_and(|c| c == Cell::Neutral) && board.phase().is_neutral_move() {
            prop_assert_eq!(result, Err(MoveError::NullMove));
        }
    }

    #[test]
    fn crooked_moves_are_never_legal(board in played_board(30), mv in any_move()) {
        let (dx, dy) = mv.delta();
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            prop_assert!(is_legal(&board, &mv).is_err());
        }
    }

    #[test]
    fn codec_round_trips_any_board(board in any_board()) {
        let value = encode(&board);
        prop_assert_eq!(value >> 53, 0);
        prop_assert_eq!(decode(value), Ok(board));
    }

    #[test]
    fn codec_round_trips_played_boards(board in played_board(60)) {
        prop_assert_eq!(decode(encode(&board)), Ok(board));
    }

    #[test]
    fn played_boards_keep_one_neutral_and_ten_pieces(board in played_board(60)) {
        prop_assert_eq!(board.count(Cell::Neutral), 1);
        prop_assert_eq!(board.count(Cell::Piece(Player::One)), 5);
        prop_assert_eq!(board.count(Cell::Piece(Player::Two)), 5);
    }

    #[test]
    fn generated_moves_are_legal(board in played_board(40)) {
        for mv in legal_moves(&board) {
            prop_assert!(is_legal(&board, &mv).is_ok(), "{} listed but illegal", mv);
        }
    }
}
