//! Adapter between the board core and a host game engine.
//!
//! The host owns turn sequencing and rendering. It hands this module a
//! [`PieceFactory`] to build renderable pieces and a [`TurnSequencer`] to ask
//! whose turn it is and to close a turn after a move lands.

use crate::board::{
    parse_placements, Board, Cell, Color, Coordinates, FenError, MoveError, Occupant, Piece,
    Square, StateError,
};
use crate::options::GameOptions;

/// What the host needs to build one renderable piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceRequest {
    /// Seat number, 0 for White and 1 for Black
    pub player: usize,
    pub color: Color,
    pub piece: Piece,
    pub sprite_path: String,
    pub size: u32,
}

/// Builds the host's renderable piece objects.
pub trait PieceFactory {
    type Piece;

    fn piece_for_player(&mut self, request: PieceRequest) -> Self::Piece;
}

/// The host's turn engine.
pub trait TurnSequencer {
    /// Color of the player to move
    fn current_player(&self) -> Color;
    /// Called exactly once for every applied move
    fn end_turn(&mut self);
}

/// Chess rules plugged into a host engine.
pub struct Chess<F: PieceFactory> {
    board: Board,
    /// Renderable piece attached to each cell, `[row][column]`
    pieces: [[Option<F::Piece>; 8]; 8],
    factory: F,
    options: GameOptions,
}

impl<F: PieceFactory> Chess<F> {
    /// An empty board. Call [`Chess::set_up_board`] before play.
    pub fn new(factory: F, options: GameOptions) -> Self {
        Chess {
            board: Board::empty(),
            pieces: std::array::from_fn(|_| std::array::from_fn(|_| None)),
            factory,
            options,
        }
    }

    /// Load the configured initial placement and attach a piece object to every placed piece.
    pub fn set_up_board(&mut self) -> Result<(), FenError> {
        let fen = self.options.initial_fen.clone();
        let placements = parse_placements(&fen).map_err(|err| {
            log::warn!("rejected FEN {fen:?}: {err}");
            err
        })?;

        self.board = Board::empty();
        self.clear_pieces();
        for p in &placements {
            let square = p.square();
            self.board.put(square, Occupant::new(p.color, p.piece));
            self.attach(square, p.color, p.piece);
        }
        self.board.recompute_masks();

        log::debug!("board set up from {fen:?} with {} pieces", placements.len());
        Ok(())
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Cell at (column, row), `None` off the board.
    #[must_use]
    pub fn holder_at(&self, column: usize, row: usize) -> Option<&Cell> {
        self.board.cell(column, row)
    }

    /// Renderable piece on (column, row), if any.
    #[must_use]
    pub fn piece_at(&self, column: usize, row: usize) -> Option<&F::Piece> {
        self.pieces.get(row)?.get(column)?.as_ref()
    }

    /// A source can be picked up when it holds a piece of the player on move.
    pub fn can_bit_move_from(&self, src: &impl Coordinates, turns: &impl TurnSequencer) -> bool {
        src.on_board()
            && self.board.occupant_at(src.square()).color() == Some(turns.current_player())
    }

    pub fn can_bit_move_from_to(
        &self,
        src: &impl Coordinates,
        dst: &impl Coordinates,
        turns: &impl TurnSequencer,
    ) -> bool {
        let piece = self.board.occupant_at(src.square());
        self.board.can_move(piece, src, dst, turns.current_player())
    }

    /// Apply an already validated move and close the turn. Returns the captured occupant.
    ///
    /// Panics when either coordinate is off the board.
    pub fn bit_moved_from_to(
        &mut self,
        src: &impl Coordinates,
        dst: &impl Coordinates,
        turns: &mut impl TurnSequencer,
    ) -> Occupant {
        let (from, to) = (src.square(), dst.square());
        let piece = self.board.occupant_at(from);
        let captured = self.board.apply_move(piece, src, dst);

        let handle = self.pieces[from.0][from.1].take();
        self.pieces[to.0][to.1] = handle;

        turns.end_turn();
        captured
    }

    /// Validate then apply. A refusal leaves the board and the turn untouched.
    pub fn try_move(
        &mut self,
        src: &impl Coordinates,
        dst: &impl Coordinates,
        turns: &mut impl TurnSequencer,
    ) -> Result<Occupant, MoveError> {
        for handle in [src.square(), dst.square()] {
            if !handle.on_board() {
                return Err(MoveError::OffBoard {
                    column: handle.1,
                    row: handle.0,
                });
            }
        }
        let from = src.square();
        let to_move = turns.current_player();
        let Some(color) = self.board.occupant_at(from).color() else {
            return Err(MoveError::EmptySource { from });
        };
        if color != to_move {
            return Err(MoveError::WrongTurn { to_move });
        }
        if !self.can_bit_move_from_to(src, dst, &*turns) {
            return Err(MoveError::Illegal {
                from,
                to: dst.square(),
            });
        }
        Ok(self.bit_moved_from_to(src, dst, turns))
    }

    #[must_use]
    pub fn state_string(&self) -> String {
        self.board.state_string()
    }

    #[must_use]
    pub fn initial_state_string(&self) -> String {
        self.state_string()
    }

    /// Load a state string and rebuild the piece objects for the loaded squares.
    pub fn set_state_string(&mut self, state: &str) -> Result<(), StateError> {
        self.board.set_state_string(state)?;

        self.clear_pieces();
        let occupied: Vec<(Square, Color, Piece)> = Square::all()
            .filter_map(|sq| {
                let (color, piece) = self.board.piece_at(sq)?;
                Some((sq, color, piece))
            })
            .collect();
        for (square, color, piece) in occupied {
            self.attach(square, color, piece);
        }
        Ok(())
    }

    fn attach(&mut self, square: Square, color: Color, piece: Piece) {
        let request = PieceRequest {
            player: color.player(),
            color,
            piece,
            sprite_path: self.options.sprite_path(color, piece),
            size: self.options.piece_size,
        };
        self.pieces[square.0][square.1] = Some(self.factory.piece_for_player(request));
    }

    fn clear_pieces(&mut self) {
        for row in self.pieces.iter_mut() {
            for slot in row.iter_mut() {
                *slot = None;
            }
        }
    }
}
