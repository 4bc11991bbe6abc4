use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Occupant, Piece, Square};

/// One piece produced by the FEN placement parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub piece: Piece,
    pub color: Color,
}

impl Placement {
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        Square::from_index(self.index)
    }
}

/// Parse a placement string into (index, piece, color) triples.
///
/// Ranks are separated by `/`, which does not advance the running index.
/// A digit skips that many squares. A piece letter lands on
/// `row = index / 8, column = index % 8`.
pub fn parse_placements(fen: &str) -> Result<Vec<Placement>, FenError> {
    let mut placements = Vec::with_capacity(32);
    let mut index = 0usize;

    for (position, c) in fen.trim().chars().enumerate() {
        if c == '/' {
            continue;
        }
        if let Some(skip) = c.to_digit(10) {
            index += skip as usize;
            continue;
        }

        let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c, position })?;
        if index >= 64 {
            return Err(FenError::TooManySquares { index });
        }
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        placements.push(Placement {
            index,
            piece,
            color,
        });
        index += 1;
    }

    Ok(placements)
}

impl Board {
    /// Parse a board from the FEN placement subset.
    ///
    /// Returns an error if the string has an unknown character or overruns the board.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placements = parse_placements(fen).map_err(|err| {
            log::warn!("rejected FEN {fen:?}: {err}");
            err
        })?;

        let mut board = Board::empty();
        for p in &placements {
            board.put(p.square(), Occupant::new(p.color, p.piece));
        }
        board.recompute_masks();

        log::debug!("loaded FEN {fen:?} with {} pieces", placements.len());
        Ok(board)
    }

    /// Parse a board from the FEN placement subset.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board to the FEN placement subset, row 0 first.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for column in 0..8 {
                match self.get(row, column) {
                    Occupant::Empty => empty += 1,
                    occupant => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(occupant.to_char());
                    }
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
