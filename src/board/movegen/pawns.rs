use super::super::{Bitboard, Board, Color, Square};

impl Board {
    /// Forward pushes onto empty squares and diagonal captures of enemy pieces.
    ///
    /// No en passant, and a pawn on the far row has no targets.
    #[must_use]
    pub fn pawn_targets(&self, from: Square, color: Color) -> Bitboard {
        let mut targets = Bitboard::EMPTY;
        let dir = color.pawn_direction();

        if let Some(single) = from.offset(dir, 0) {
            if self.is_empty(single) {
                targets.insert(single);

                if from.0 == color.pawn_start_row() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            targets.insert(double);
                        }
                    }
                }
            }
        }

        for d_column in [-1, 1] {
            if let Some(capture) = from.offset(dir, d_column) {
                if self.occupant_at(capture).is_enemy_of(color) {
                    targets.insert(capture);
                }
            }
        }

        targets
    }
}
