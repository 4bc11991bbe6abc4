//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `fen.rs` - FEN placement loading and writing
//! - `movegen.rs` - Per-piece target generation
//! - `validate.rs` - Move acceptance and turn ownership
//! - `apply.rs` - Applying moves and mask maintenance
//! - `codec.rs` - State string save/load
//! - `proptest.rs` - Property-based tests

mod apply;
mod codec;
mod fen;

use crate::board::Square;

/// Sorted linear indices of a target set
pub(super) fn sorted(indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut v: Vec<usize> = indices.into_iter().collect();
    v.sort_unstable();
    v
}

/// Square from (column, row), the order the interaction layer uses
pub(super) fn at(column: usize, row: usize) -> Square {
    Square(row, column)
}
