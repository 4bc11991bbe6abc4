use super::{Board, Coordinates, Occupant};

impl Board {
    /// Move `piece` from `source` to `destination` without any legality check.
    ///
    /// Clears the source, overwrites the destination and rebuilds both masks.
    /// Returns whatever stood on the destination before. Panics when either
    /// coordinate is off the board.
    pub fn apply_move(
        &mut self,
        piece: Occupant,
        source: &impl Coordinates,
        destination: &impl Coordinates,
    ) -> Occupant {
        self.debug_assert_masks();
        let from = source.square();
        let to = destination.square();
        let captured = self.occupant_at(to);

        self.put(from, Occupant::Empty);
        self.put(to, piece);
        self.recompute_masks();

        if captured.is_empty() {
            log::debug!("{piece} {from}{to}");
        } else {
            log::debug!("{piece} {from}{to} captures {captured}");
        }
        captured
    }
}
