//! Pseudo-legal target generation, one function per piece kind.
//!
//! Every generator reads occupants only and returns the reachable squares as
//! a [`Bitboard`] of linear indices. Nothing here looks at check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{pop_lsb, Bitboard, Board, Color, Piece, Square};

impl Board {
    /// Targets for `piece` of `color` standing on `from`.
    #[must_use]
    pub fn targets_for(&self, piece: Piece, from: Square, color: Color) -> Bitboard {
        match piece {
            Piece::Pawn => self.pawn_targets(from, color),
            Piece::Knight => self.knight_targets(from, color),
            Piece::Bishop => self.bishop_targets(from, color),
            Piece::Rook => self.rook_targets(from, color),
            Piece::Queen => self.queen_targets(from, color),
            Piece::King => self.king_targets(from, color),
        }
    }

    /// Every (from, to) pair available to `color`, ordered by source index.
    #[must_use]
    pub fn pseudo_moves(&self, color: Color) -> Vec<(Square, Square)> {
        let mut moves = Vec::new();
        let mut own = self.occupancy(color);
        while !own.is_empty() {
            let from = pop_lsb(&mut own);
            let Some(piece) = self.occupant_at(from).piece() else {
                continue;
            };
            moves.extend(
                self.targets_for(piece, from, color)
                    .iter()
                    .map(|to| (from, to)),
            );
        }
        moves
    }
}
