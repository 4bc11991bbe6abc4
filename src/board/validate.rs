use super::{Board, Color, Coordinates, Occupant};

impl Board {
    /// Whether `piece` may go from `source` to `destination` with `to_move` on turn.
    ///
    /// False when the piece is not `to_move`'s, or when the destination is not
    /// among the generated targets from `source`. An empty occupant never moves,
    /// and neither does anything addressed off the board.
    #[must_use]
    pub fn can_move(
        &self,
        piece: Occupant,
        source: &impl Coordinates,
        destination: &impl Coordinates,
        to_move: Color,
    ) -> bool {
        let Some((color, kind)) = piece.as_pair() else {
            return false;
        };
        if !source.on_board() || !destination.on_board() {
            return false;
        }

        let verdict = color == to_move
            && self
                .targets_for(kind, source.square(), color)
                .contains_index(destination.linear_index());

        log::trace!(
            "{piece} {}{}: {}",
            source.square(),
            destination.square(),
            if verdict { "accepted" } else { "rejected" }
        );
        verdict
    }
}
