//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let board = Board::from_fen(START_FEN);
//! assert_eq!(board.piece_count(), 32);
//! ```

pub use super::{
    Bitboard, Board, BoardBuilder, Color, Coordinates, FenError, MoveError, Occupant, Piece,
    Square, StateError, START_FEN,
};
