//! Square coordinates, board cells and the coordinate capability trait.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::occupant::Occupant;
use crate::board::error::SquareError;

/// Anything that can name a board cell by column and row.
///
/// The interaction layer hands source and destination through this trait, so
/// the core never needs to know the concrete handle type.
pub trait Coordinates {
    /// Column 0-7
    fn column(&self) -> usize;
    /// Row 0-7
    fn row(&self) -> usize;

    /// `row * 8 + column`
    #[inline]
    fn linear_index(&self) -> usize {
        self.row() * 8 + self.column()
    }

    #[inline]
    fn square(&self) -> Square {
        Square(self.row(), self.column())
    }

    /// Host handles are not range checked, so callers test this first.
    #[inline]
    fn on_board(&self) -> bool {
        self.row() < 8 && self.column() < 8
    }
}

/// A square on the board, represented as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, column)

impl Square {
    /// Get the square's linear index (0-63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from a linear index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Step by a signed (row, column) delta, `None` when leaving the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Self> {
        let row = self.0 as isize + d_row;
        let column = self.1 as isize + d_column;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Square(row as usize, column as usize))
        } else {
            None
        }
    }

    /// All 64 squares in linear order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl Coordinates for Square {
    #[inline]
    fn column(&self) -> usize {
        self.1
    }

    #[inline]
    fn row(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if column >= 8 {
            return Err(SquareError::ColumnOutOfBounds { column });
        }
        Ok(Square(row, column))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Algebraic form: column letter `a`-`h`, then row number `1`-`8` (`a1` is row 0).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(col_ch), Some(row_ch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let column = match col_ch {
            'a'..='h' => col_ch as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match row_ch {
            '1'..='8' => row_ch as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(row, column))
    }
}

/// One board cell: fixed coordinate plus its current occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    square: Square,
    occupant: Occupant,
}

impl Cell {
    pub(crate) const fn new(square: Square) -> Self {
        Cell {
            square,
            occupant: Occupant::Empty,
        }
    }

    #[inline]
    #[must_use]
    pub const fn occupant(&self) -> Occupant {
        self.occupant
    }

    #[inline]
    pub(crate) fn set_occupant(&mut self, occupant: Occupant) {
        self.occupant = occupant;
    }
}

impl Coordinates for Cell {
    #[inline]
    fn column(&self) -> usize {
        self.square.1
    }

    #[inline]
    fn row(&self) -> usize {
        self.square.0
    }
}
