//! Flat 64-character board snapshots.
//!
//! The two directions do not use the same alphabet. Saving writes one piece
//! letter per square, loading reads one player digit per square and puts a
//! pawn of that player there, so a save/load cycle keeps which squares are
//! occupied but turns every piece into a pawn. Tests pin this behaviour.

use super::error::StateError;
use super::{Board, Color, Occupant, Piece, Square};

pub const STATE_LEN: usize = 64;

/// Decode a load-format state string without touching any board.
///
/// `'0'` is empty, digit `d` is a pawn of player `d - 1`.
pub fn parse_state(state: &str) -> Result<[Occupant; STATE_LEN], StateError> {
    let len = state.chars().count();
    if len != STATE_LEN {
        return Err(StateError::InvalidLength { len });
    }

    let mut occupants = [Occupant::Empty; STATE_LEN];
    for (index, c) in state.chars().enumerate() {
        let digit = c
            .to_digit(10)
            .ok_or(StateError::InvalidChar { char: c, index })? as usize;
        if digit == 0 {
            continue;
        }
        let color = Color::from_player(digit - 1).ok_or(StateError::UnknownPlayer {
            player: digit - 1,
            index,
        })?;
        occupants[index] = Occupant::new(color, Piece::Pawn);
    }
    Ok(occupants)
}

impl Board {
    /// One character per square in linear order: `'0'` empty, `PNBRQK` white, `pnbrqk` black.
    #[must_use]
    pub fn state_string(&self) -> String {
        self.cells().map(|cell| cell.occupant().to_char()).collect()
    }

    /// Replace every square from a load-format state string.
    ///
    /// The string is validated in full first; on error the board is unchanged.
    pub fn set_state_string(&mut self, state: &str) -> Result<(), StateError> {
        let occupants = parse_state(state).map_err(|err| {
            log::warn!("rejected state string {state:?}: {err}");
            err
        })?;

        for (index, occupant) in occupants.into_iter().enumerate() {
            self.put(Square::from_index(index), occupant);
        }
        self.recompute_masks();

        log::debug!("loaded state with {} pieces", self.piece_count());
        Ok(())
    }
}
