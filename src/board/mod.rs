//! Board representation and move rules.
//!
//! An 8x8 grid of cells plus per-color occupancy bitboards that are rebuilt
//! from the grid after every write. Move generation is pseudo-legal: piece
//! geometry and ownership only, no check, castling, en passant or promotion.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color, Occupant, Piece, Square};
//!
//! let mut board = Board::new();
//! let pawn = Occupant::new(Color::White, Piece::Pawn);
//! assert!(board.can_move(pawn, &Square(1, 4), &Square(3, 4), Color::White));
//! board.apply_move(pawn, &Square(1, 4), &Square(3, 4));
//! assert_eq!(board.state_string().chars().nth(28), Some('P'));
//! ```

mod attack_tables;
mod builder;
mod codec;
mod error;
mod fen;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use codec::{parse_state, STATE_LEN};
pub use error::{FenError, MoveError, OptionsError, SquareError, StateError, TagError};
pub use fen::{parse_placements, Placement};
pub use state::{Board, START_FEN};
pub use types::{
    Bitboard, BitboardIter, Cell, Color, Coordinates, Occupant, Piece, Square, BLACK_TAG_OFFSET,
};

pub(crate) use types::pop_lsb;
