use crate::domain::rules::{PieceId, Position, GOAL, HOME_STRETCH_END, TRACK_START, YARD};

/// A single token. Position 0 is the yard, anything past 62 is the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    position: Position,
}

impl Piece {
    pub const fn new(id: PieceId) -> Self {
        Self { id, position: YARD }
    }

    pub const fn id(&self) -> PieceId {
        self.id
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn is_in_yard(&self) -> bool {
        self.position == YARD
    }

    pub const fn is_in_goal(&self) -> bool {
        self.position > HOME_STRETCH_END
    }

    /// Distance to the goal square. Only meaningful for a piece on the board.
    ///
    /// A piece beyond square 63 reports 0 rather than a negative distance;
    /// legal play never moves one there.
    pub const fn steps_until_goal(&self) -> Position {
        GOAL.saturating_sub(self.position)
    }

    /// Moves forward by `steps`. Legality is the caller's concern.
    pub fn advance(&mut self, steps: Position) {
        self.position = self.position.saturating_add(steps);
    }

    pub(crate) fn enter_track(&mut self) {
        self.position = TRACK_START;
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, position: Position) {
        self.position = position;
    }
}
