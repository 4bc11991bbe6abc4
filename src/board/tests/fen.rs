//! FEN placement tests.

use crate::board::{parse_placements, Board, Color, FenError, Occupant, Piece, Square, START_FEN};

#[test]
fn test_start_fen_places_32_pieces() {
    let board = Board::from_fen(START_FEN);

    let tags: Vec<u8> = board.cells().map(|c| c.occupant().tag()).collect();
    let occupied = tags.iter().filter(|&&t| t != 0).count();
    let white = tags.iter().filter(|&&t| t != 0 && t < 128).count();
    let black = tags.iter().filter(|&&t| t >= 128).count();

    assert_eq!(occupied, 32);
    assert_eq!(white, 16);
    assert_eq!(black, 16);
    assert_eq!(board, Board::new());
}

#[test]
fn test_first_rank_string_is_row_zero() {
    let board = Board::from_fen(START_FEN);
    assert_eq!(board.get(0, 0), Occupant::new(Color::White, Piece::Rook));
    assert_eq!(board.get(0, 3), Occupant::new(Color::White, Piece::Queen));
    assert_eq!(board.get(0, 4), Occupant::new(Color::White, Piece::King));
    assert_eq!(board.get(1, 7), Occupant::new(Color::White, Piece::Pawn));
    assert_eq!(board.get(6, 0), Occupant::new(Color::Black, Piece::Pawn));
    assert_eq!(board.get(7, 4), Occupant::new(Color::Black, Piece::King));
}

#[test]
fn test_masks_follow_fen() {
    let board = Board::from_fen("8/8/3k4/8/8/8/8/7Q");
    assert_eq!(board.black_pieces().indices(), vec![19]);
    assert_eq!(board.white_pieces().indices(), vec![63]);
}

#[test]
fn test_slash_does_not_advance() {
    // Separators are ignored, so an unbalanced rank simply flows on.
    let with = parse_placements("7/r").unwrap();
    let without = parse_placements("7r").unwrap();
    assert_eq!(with, without);
    assert_eq!(with[0].index, 7);
    assert_eq!(with[0].square(), Square(0, 7));
}

#[test]
fn test_digits_skip_squares() {
    let placements = parse_placements("1n6/8/2B").unwrap();
    assert_eq!(placements.len(), 2);
    let triples: Vec<_> = placements
        .iter()
        .map(|p| (p.index, p.piece, p.color))
        .collect();
    assert_eq!(
        triples,
        vec![(1, Piece::Knight, Color::Black), (18, Piece::Bishop, Color::White)]
    );
}

#[test]
fn test_short_fen_leaves_rest_empty() {
    let board = Board::from_fen("K");
    assert_eq!(board.piece_count(), 1);
    assert_eq!(board.get(0, 0), Occupant::new(Color::White, Piece::King));
}

#[test]
fn test_invalid_letter_is_error() {
    assert_eq!(
        Board::try_from_fen("RNBQKBNR/PPPPPPPX/8/8/8/8/pppppppp/rnbqkbnr"),
        Err(FenError::InvalidPiece {
            char: 'X',
            position: 16
        })
    );
}

#[test]
fn test_extra_fields_are_rejected() {
    let err = Board::try_from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
    assert_eq!(
        err,
        FenError::InvalidPiece {
            char: ' ',
            position: 15
        }
    );
}

#[test]
fn test_overrun_is_error() {
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8/8/p"),
        Err(FenError::TooManySquares { index: 64 })
    );
    // Digits past the end with no piece after them are harmless.
    assert!(Board::try_from_fen("8/8/8/8/8/8/8/89").is_ok());
}

#[test]
fn test_to_fen_round_trip() {
    for fen in [START_FEN, "8/8/3k4/8/8/8/8/7Q", "r6R/1p4P1/8/8/8/8/8/4K2k"] {
        let board = Board::from_fen(fen);
        assert_eq!(board.to_fen(), fen);
        assert_eq!(Board::from_fen(&board.to_fen()), board);
    }
}

#[test]
fn test_from_str() {
    let board: Board = START_FEN.parse().unwrap();
    assert_eq!(board.piece_count(), 32);
    assert!("zz".parse::<Board>().is_err());
}
