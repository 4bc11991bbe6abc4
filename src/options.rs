//! Game setup options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{parse_placements, Color, OptionsError, Piece, START_FEN};

pub const DEFAULT_PIECE_SIZE: u32 = 64;
pub const DEFAULT_SPRITE_DIR: &str = "chess";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameOptions {
    pub rows: usize,
    pub columns: usize,
    /// Placement loaded by `Chess::set_up_board`
    pub initial_fen: String,
    /// Directory holding `w_<piece>.png` / `b_<piece>.png`
    pub sprite_dir: String,
    /// Edge length in pixels handed to the piece factory
    pub piece_size: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            rows: 8,
            columns: 8,
            initial_fen: START_FEN.to_string(),
            sprite_dir: DEFAULT_SPRITE_DIR.to_string(),
            piece_size: DEFAULT_PIECE_SIZE,
        }
    }
}

impl GameOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fen(mut self, fen: impl Into<String>) -> Self {
        self.initial_fen = fen.into();
        self
    }

    #[must_use]
    pub fn with_sprite_dir(mut self, dir: impl Into<String>) -> Self {
        self.sprite_dir = dir.into();
        self
    }

    #[must_use]
    pub const fn with_piece_size(mut self, size: u32) -> Self {
        self.piece_size = size;
        self
    }

    /// Check the board is 8x8 and the initial placement parses.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.rows != 8 || self.columns != 8 {
            return Err(OptionsError::UnsupportedDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        parse_placements(&self.initial_fen)?;
        Ok(())
    }

    /// Sprite path for a piece, e.g. `chess/w_pawn.png`.
    #[must_use]
    pub fn sprite_path(&self, color: Color, piece: Piece) -> String {
        let prefix = match color {
            Color::White => "w_",
            Color::Black => "b_",
        };
        format!("{}/{prefix}{}.png", self.sprite_dir, piece.name())
    }
}
