//! Error types for board setup, persistence and move attempts.

use std::fmt;

use super::types::{Color, Square};

/// Error type for FEN placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Character that is neither a piece letter, a digit nor `/`
    InvalidPiece { char: char, position: usize },
    /// A piece would be placed past the last square
    TooManySquares { index: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::InvalidPiece { char, position } => {
                write!(
                    f,
                    "Invalid piece character '{char}' at position {position} in FEN"
                )
            }
            FenError::TooManySquares { index } => {
                write!(
                    f,
                    "FEN places a piece on square index {index}, board has 64"
                )
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for state string decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// State string must hold exactly one character per square
    InvalidLength { len: usize },
    /// Non-digit character in the state string
    InvalidChar { char: char, index: usize },
    /// Digit names a player that does not exist
    UnknownPlayer { player: usize, index: usize },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidLength { len } => {
                write!(f, "State string must be 64 characters, found {len}")
            }
            StateError::InvalidChar { char, index } => {
                write!(
                    f,
                    "Invalid character '{char}' at index {index} in state string"
                )
            }
            StateError::UnknownPlayer { player, index } => {
                write!(
                    f,
                    "Unknown player {player} at index {index} in state string"
                )
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Error type for occupant tag decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    OutOfRange { tag: u8 },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::OutOfRange { tag } => write!(f, "Occupant tag {tag} is not a valid encoding"),
        }
    }
}

impl std::error::Error for TagError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { column: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { column } => {
                write!(f, "Column {column} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a move attempt was refused. Refusal keeps the turn open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing stands on the source square
    EmptySource { from: Square },
    /// The piece belongs to the player not on move
    WrongTurn { to_move: Color },
    /// The destination is not among the piece's targets
    Illegal { from: Square, to: Square },
    /// A coordinate lies outside the 8x8 grid
    OffBoard { column: usize, row: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { from } => write!(f, "No piece on {from}"),
            MoveError::WrongTurn { to_move } => write!(f, "It is {to_move}'s turn"),
            MoveError::Illegal { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::OffBoard { column, row } => {
                write!(f, "Column {column}, row {row} is off the board")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for rejected game options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// Only an 8x8 board is supported
    UnsupportedDimensions { rows: usize, columns: usize },
    /// The initial position does not parse
    InvalidFen(FenError),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::UnsupportedDimensions { rows, columns } => {
                write!(f, "Unsupported board size {columns}x{rows}, expected 8x8")
            }
            OptionsError::InvalidFen(err) => write!(f, "Invalid initial FEN: {err}"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::InvalidFen(err) => Some(err),
            OptionsError::UnsupportedDimensions { .. } => None,
        }
    }
}

impl From<FenError> for OptionsError {
    fn from(err: FenError) -> Self {
        OptionsError::InvalidFen(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece {
            char: 'z',
            position: 3,
        };
        assert!(err.to_string().contains("'z'"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_fen_error_too_many_squares() {
        let err = FenError::TooManySquares { index: 64 };
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_state_error_length() {
        let err = StateError::InvalidLength { len: 12 };
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_state_error_unknown_player() {
        let err = StateError::UnknownPlayer {
            player: 4,
            index: 10,
        };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_tag_error() {
        let err = TagError::OutOfRange { tag: 200 };
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_move_error_illegal() {
        let err = MoveError::Illegal {
            from: Square(1, 4),
            to: Square(4, 4),
        };
        assert_eq!(err.to_string(), "Illegal move e2e5");
    }

    #[test]
    fn test_move_error_off_board() {
        let err = MoveError::OffBoard { column: 8, row: 2 };
        assert_eq!(err.to_string(), "Column 8, row 2 is off the board");
    }

    #[test]
    fn test_options_error_wraps_fen() {
        let err = OptionsError::from(FenError::TooManySquares { index: 70 });
        assert!(err.to_string().contains("70"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_clone() {
        let err = StateError::InvalidChar {
            char: 'x',
            index: 0,
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
