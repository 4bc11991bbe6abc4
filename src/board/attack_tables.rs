//! Fixed-offset target tables for knights and kings.
//!
//! Each entry holds every in-bounds square reachable from that square,
//! before any occupancy filtering.

use once_cell::sync::Lazy;

use super::Bitboard;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// Directions as (row delta, column delta)
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

fn offset_table(deltas: &[(isize, isize); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in 0..64 {
        let r = (sq / 8) as isize;
        let c = (sq % 8) as isize;
        let mut mask = 0u64;
        for (dr, dc) in deltas {
            let nr = r + dr;
            let nc = c + dc;
            if (0..8).contains(&nr) && (0..8).contains(&nc) {
                mask |= 1u64 << (nr as usize * 8 + nc as usize);
            }
        }
        table[sq] = Bitboard(mask);
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Bitboard; 64]> = Lazy::new(|| offset_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[Bitboard; 64]> = Lazy::new(|| offset_table(&KING_DELTAS));
