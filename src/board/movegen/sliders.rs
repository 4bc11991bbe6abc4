use super::super::attack_tables::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Bitboard, Board, Color, Occupant, Square};

impl Board {
    /// Cast one ray per direction. A ray stops on the first occupied square,
    /// which is included only when it holds an enemy piece.
    pub(crate) fn ray_targets(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Bitboard {
        let mut targets = Bitboard::EMPTY;
        for &(d_row, d_column) in directions {
            let mut current = from;
            while let Some(next) = current.offset(d_row, d_column) {
                match self.occupant_at(next) {
                    Occupant::Empty => targets.insert(next),
                    occupant => {
                        if occupant.is_enemy_of(color) {
                            targets.insert(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        targets
    }

    #[must_use]
    pub fn rook_targets(&self, from: Square, color: Color) -> Bitboard {
        self.ray_targets(from, color, &ROOK_DIRECTIONS)
    }

    #[must_use]
    pub fn bishop_targets(&self, from: Square, color: Color) -> Bitboard {
        self.ray_targets(from, color, &BISHOP_DIRECTIONS)
    }

    #[must_use]
    pub fn queen_targets(&self, from: Square, color: Color) -> Bitboard {
        self.rook_targets(from, color) | self.bishop_targets(from, color)
    }
}
