use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Bitboard, Board, Color, Square};

impl Board {
    #[must_use]
    pub fn knight_targets(&self, from: Square, color: Color) -> Bitboard {
        self.step_targets(KNIGHT_TARGETS[from.as_index()], color)
    }

    /// Keep the in-bounds candidates that are empty or hold an enemy piece.
    pub(crate) fn step_targets(&self, candidates: Bitboard, color: Color) -> Bitboard {
        candidates
            .iter()
            .filter(|&to| self.occupant_at(to).color() != Some(color))
            .collect()
    }
}
