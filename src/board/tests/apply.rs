//! Move application tests.

use super::at;
use crate::board::{Board, BoardBuilder, Color, Occupant, Piece, Square};

#[test]
fn test_apply_then_serialize_pawn_step() {
    let mut board = BoardBuilder::new()
        .piece(at(3, 1), Color::White, Piece::Pawn)
        .build();
    let pawn = board.occupant_at(at(3, 1));

    assert!(board.can_move(pawn, &at(3, 1), &at(3, 2), Color::White));
    board.apply_move(pawn, &at(3, 1), &at(3, 2));

    let state: Vec<char> = board.state_string().chars().collect();
    assert_eq!(state[at(3, 1).as_index()], '0');
    assert_eq!(state[at(3, 2).as_index()], 'P');
    assert_eq!(state.iter().filter(|&&c| c != '0').count(), 1);
}

#[test]
fn test_apply_updates_masks() {
    let mut board = Board::new();
    let pawn = Occupant::new(Color::White, Piece::Pawn);
    board.apply_move(pawn, &at(4, 1), &at(4, 3));

    assert!(!board.white_pieces().contains(at(4, 1)));
    assert!(board.white_pieces().contains(at(4, 3)));
    assert_eq!(board.white_pieces().popcount(), 16);
    let cached = (board.white_pieces(), board.black_pieces());
    assert_eq!(board.masks_from_grid(), cached);
}

#[test]
fn test_capture_overwrites_and_reports() {
    let mut board = BoardBuilder::new()
        .piece(at(0, 0), Color::White, Piece::Rook)
        .piece(at(0, 6), Color::Black, Piece::Knight)
        .build();
    let rook = Occupant::new(Color::White, Piece::Rook);

    let captured = board.apply_move(rook, &at(0, 0), &at(0, 6));

    assert_eq!(captured, Occupant::new(Color::Black, Piece::Knight));
    assert_eq!(board.occupant_at(at(0, 6)), rook);
    assert!(board.black_pieces().is_empty());
    assert_eq!(board.piece_count(), 1);
}

#[test]
fn test_apply_does_not_validate() {
    // The applier trusts its caller.
    let mut board = Board::new();
    let king = Occupant::new(Color::White, Piece::King);
    board.apply_move(king, &at(4, 0), &at(4, 5));
    assert_eq!(board.occupant_at(Square(5, 4)), king);
    assert!(board.is_empty(Square(0, 4)));
}

#[test]
fn test_recompute_is_idempotent() {
    let mut board = Board::new();
    board.recompute_masks();
    let first = (board.white_pieces(), board.black_pieces());
    board.recompute_masks();
    assert_eq!((board.white_pieces(), board.black_pieces()), first);
}
