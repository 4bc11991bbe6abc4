//! Core board types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Occupant` - tagged square contents with its integer tag projection
//! - `Square`, `Cell` and the `Coordinates` capability trait
//! - `Bitboard` - 64-bit square sets used for occupancy and move targets

mod bitboard;
mod occupant;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use occupant::{Occupant, BLACK_TAG_OFFSET};
pub use piece::{Color, Piece};
pub use square::{Cell, Coordinates, Square};

pub(crate) use bitboard::pop_lsb;
