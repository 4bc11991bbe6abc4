use std::fmt;

use super::{Bitboard, Cell, Color, Occupant, Piece, Square};

/// FEN-subset placement of the standard starting position, row 0 first.
pub const START_FEN: &str = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// `grid[row][column]`
    pub(crate) grid: [[Cell; 8]; 8],
    // Derived from `grid` by `recompute_masks`, never patched in place.
    // Mask readers check them against the grid in debug builds.
    pub(crate) white_pieces: Bitboard,
    pub(crate) black_pieces: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_row = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (column, piece) in back_row.iter().enumerate() {
            board.put(Square(0, column), Occupant::new(Color::White, *piece));
            board.put(Square(1, column), Occupant::new(Color::White, Piece::Pawn));
            board.put(Square(6, column), Occupant::new(Color::Black, Piece::Pawn));
            board.put(Square(7, column), Occupant::new(Color::Black, *piece));
        }
        board.recompute_masks();
        board
    }

    /// Board with every cell empty and both masks clear.
    pub fn empty() -> Self {
        Board {
            grid: std::array::from_fn(|row| {
                std::array::from_fn(|column| Cell::new(Square(row, column)))
            }),
            white_pieces: Bitboard::EMPTY,
            black_pieces: Bitboard::EMPTY,
        }
    }

    /// Occupant at (row, column). Panics when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Occupant {
        self.grid[row][column].occupant()
    }

    /// Write an occupant and rebuild both masks.
    pub fn set(&mut self, row: usize, column: usize, occupant: Occupant) {
        self.grid[row][column].set_occupant(occupant);
        self.recompute_masks();
    }

    /// Write without touching the masks; callers batch writes and recompute once.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, occupant: Occupant) {
        self.grid[sq.0][sq.1].set_occupant(occupant);
    }

    #[inline]
    #[must_use]
    pub fn occupant_at(&self, sq: Square) -> Occupant {
        self.grid[sq.0][sq.1].occupant()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.occupant_at(sq).as_pair()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.occupant_at(sq).is_empty()
    }

    /// Cell accessor for the interaction layer, addressed by (column, row).
    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        self.grid.get(row).and_then(|cells| cells.get(column))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    /// Clear both masks, then set the owner bit for every occupied cell.
    pub fn recompute_masks(&mut self) {
        let (white, black) = self.masks_from_grid();
        self.white_pieces = white;
        self.black_pieces = black;
    }

    pub(crate) fn masks_from_grid(&self) -> (Bitboard, Bitboard) {
        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        for (row, cells) in self.grid.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                match cell.occupant().color() {
                    Some(Color::White) => white.insert(Square(row, column)),
                    Some(Color::Black) => black.insert(Square(row, column)),
                    None => {}
                }
            }
        }
        (white, black)
    }

    /// Panics in debug builds if the cached masks disagree with the grid.
    #[inline]
    pub(crate) fn debug_assert_masks(&self) {
        #[cfg(debug_assertions)]
        {
            let (white, black) = self.masks_from_grid();
            assert_eq!(self.white_pieces, white, "white mask out of sync");
            assert_eq!(self.black_pieces, black, "black mask out of sync");
            assert!((white & black).is_empty(), "occupancy masks overlap");
        }
    }

    #[inline]
    #[must_use]
    pub fn white_pieces(&self) -> Bitboard {
        self.debug_assert_masks();
        self.white_pieces
    }

    #[inline]
    #[must_use]
    pub fn black_pieces(&self) -> Bitboard {
        self.debug_assert_masks();
        self.black_pieces
    }

    #[inline]
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.debug_assert_masks();
        match color {
            Color::White => self.white_pieces,
            Color::Black => self.black_pieces,
        }
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.debug_assert_masks();
        self.white_pieces | self.black_pieces
    }

    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.occupied().popcount()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Row 7 on top, one snapshot character per square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for column in 0..8 {
                let ch = match self.get(row, column) {
                    Occupant::Empty => '.',
                    occupant => occupant.to_char(),
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
