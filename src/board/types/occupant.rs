//! Square occupant and its integer tag projection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use crate::board::error::TagError;

/// Offset added to the piece code for black pieces in the tag encoding.
pub const BLACK_TAG_OFFSET: u8 = 128;

/// What stands on a square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Occupant {
    #[default]
    Empty,
    Occupied { piece: Piece, color: Color },
}

impl Occupant {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        Occupant::Occupied { piece, color }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied { color, .. } => Some(color),
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied { piece, .. } => Some(piece),
        }
    }

    /// `(color, piece)` pair, or `None` for an empty square
    #[inline]
    #[must_use]
    pub const fn as_pair(self) -> Option<(Color, Piece)> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied { piece, color } => Some((color, piece)),
        }
    }

    /// True if occupied by a piece of the other color
    #[inline]
    #[must_use]
    pub fn is_enemy_of(self, color: Color) -> bool {
        matches!(self.color(), Some(c) if c != color)
    }

    /// Integer tag: 0 empty, 1-6 white, 129-134 black.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Occupant::Empty => 0,
            Occupant::Occupied {
                piece,
                color: Color::White,
            } => piece.code(),
            Occupant::Occupied {
                piece,
                color: Color::Black,
            } => piece.code() + BLACK_TAG_OFFSET,
        }
    }

    /// Decode an integer tag. Anything outside `{0} ∪ [1,6] ∪ [129,134]` is rejected.
    pub fn from_tag(tag: u8) -> Result<Self, TagError> {
        if tag == 0 {
            return Ok(Occupant::Empty);
        }
        let (code, color) = if tag < BLACK_TAG_OFFSET {
            (tag, Color::White)
        } else {
            (tag - BLACK_TAG_OFFSET, Color::Black)
        };
        Piece::from_code(code)
            .map(|piece| Occupant::new(color, piece))
            .ok_or(TagError::OutOfRange { tag })
    }

    /// Snapshot character: `'0'` empty, `PNBRQK` white, `pnbrqk` black.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Occupant::Empty => '0',
            Occupant::Occupied { piece, color } => piece.to_fen_char(color),
        }
    }
}

impl From<(Color, Piece)> for Occupant {
    fn from((color, piece): (Color, Piece)) -> Self {
        Occupant::new(color, piece)
    }
}

impl TryFrom<u8> for Occupant {
    type Error = TagError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Occupant::from_tag(tag)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Empty => write!(f, "empty"),
            Occupant::Occupied { piece, color } => write!(f, "{color} {piece}"),
        }
    }
}
