use super::super::attack_tables::KING_TARGETS;
use super::super::{Bitboard, Board, Color, Square};

impl Board {
    /// One step in any of the eight directions. No castling.
    #[must_use]
    pub fn king_targets(&self, from: Square, color: Color) -> Bitboard {
        self.step_targets(KING_TARGETS[from.as_index()], color)
    }
}
