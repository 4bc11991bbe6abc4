pub mod board;
pub mod game;
pub mod options;

pub use board::{Board, Color, Coordinates, Occupant, Piece, Square};
pub use game::{Chess, PieceFactory, PieceRequest, TurnSequencer};
pub use options::GameOptions;
