//! State string tests.

use super::at;
use crate::board::{
    parse_state, Board, BoardBuilder, Color, Occupant, Piece, StateError, STATE_LEN,
};

const START_STATE: &str =
    "RNBQKBNRPPPPPPPP00000000000000000000000000000000pppppppprnbqkbnr";

#[test]
fn test_serialize_start_position() {
    let state = Board::new().state_string();
    assert_eq!(state.len(), STATE_LEN);
    assert_eq!(state, START_STATE);
}

#[test]
fn test_serialize_empty_board() {
    assert_eq!(Board::empty().state_string(), "0".repeat(64));
}

#[test]
fn test_load_places_pawns_by_player() {
    let mut state = "0".repeat(64);
    state.replace_range(9..10, "1");
    state.replace_range(50..51, "2");

    let mut board = Board::new();
    board.set_state_string(&state).unwrap();

    assert_eq!(board.piece_count(), 2);
    let white_pawn = Occupant::new(Color::White, Piece::Pawn);
    let black_pawn = Occupant::new(Color::Black, Piece::Pawn);
    assert_eq!(board.occupant_at(at(1, 1)), white_pawn);
    assert_eq!(board.occupant_at(at(2, 6)), black_pawn);
    assert!(board.white_pieces().contains_index(9));
    assert!(board.black_pieces().contains_index(50));
}

/// Known discrepancy: save writes piece letters, load reads player digits and
/// always rebuilds pawns. Pinned until the format is settled.
#[test]
fn test_save_load_asymmetry() {
    let board = Board::new();
    let saved = board.state_string();

    // The saved form is not loadable at all.
    let mut reloaded = Board::empty();
    assert_eq!(
        reloaded.set_state_string(&saved),
        Err(StateError::InvalidChar {
            char: 'R',
            index: 0
        })
    );

    // Translating letters to owner digits loads, but every piece comes back a pawn.
    let digits: String = saved
        .chars()
        .map(|c| match c {
            '0' => '0',
            c if c.is_ascii_uppercase() => '1',
            _ => '2',
        })
        .collect();
    reloaded.set_state_string(&digits).unwrap();
    assert_eq!(reloaded.occupied(), board.occupied());
    assert_eq!(reloaded.white_pieces(), board.white_pieces());
    assert_ne!(reloaded, board);
    assert_eq!(
        reloaded.state_string(),
        "PPPPPPPPPPPPPPPP00000000000000000000000000000000pppppppppppppppp"
    );
}

#[test]
fn test_load_rejects_wrong_length() {
    let mut board = Board::new();
    assert_eq!(
        board.set_state_string("000"),
        Err(StateError::InvalidLength { len: 3 })
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_load_rejects_unknown_player_without_mutating() {
    let mut state = "1".repeat(64);
    state.replace_range(40..41, "3");

    let mut board = BoardBuilder::new()
        .piece(at(0, 0), Color::Black, Piece::King)
        .build();
    let before = board.clone();
    assert_eq!(
        board.set_state_string(&state),
        Err(StateError::UnknownPlayer {
            player: 2,
            index: 40
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_parse_state_alone() {
    let occupants = parse_state(&"2".repeat(64)).unwrap();
    assert!(occupants
        .iter()
        .all(|o| *o == Occupant::new(Color::Black, Piece::Pawn)));
    assert!(parse_state(&"x".repeat(64)).is_err());
}
