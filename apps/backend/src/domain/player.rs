use std::fmt::Write as _;

use crate::domain::dice::Dice;
use crate::domain::piece::Piece;
use crate::domain::rules::{in_home_stretch, PieceId, Roll, ENTRY_ROLL, PIECE_IDS};
use crate::errors::domain::DomainError;

/// A seat at the board: four pieces, a color and at most one pending roll.
///
/// The player draws from the board's die; it never owns one of its own.
#[derive(Debug, Clone)]
pub struct Player {
    color: String,
    pieces: [Piece; 4],
    dice: Dice,
    pending_roll: Option<Roll>,
}

impl Player {
    pub fn new(color: impl Into<String>, dice: Dice) -> Self {
        Self {
            color: color.into(),
            pieces: PIECE_IDS.map(Piece::new),
            dice,
            pending_roll: None,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn pending_roll(&self) -> Option<Roll> {
        self.pending_roll
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    fn piece_mut(&mut self, id: PieceId) -> Result<&mut Piece, DomainError> {
        self.pieces
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(DomainError::PieceNotFound(id))
    }

    /// Rolls the shared die and holds the result until it is used or reset.
    pub fn roll_dice(&mut self) -> Result<Roll, DomainError> {
        if self.pending_roll.is_some() {
            return Err(DomainError::AlreadyRolled);
        }
        let roll = self.dice.roll();
        self.pending_roll = Some(roll);
        Ok(roll)
    }

    pub fn reset_dice_roll(&mut self) {
        self.pending_roll = None;
    }

    /// Puts a piece on the first track square. Requires a pending six.
    ///
    /// The piece is not required to be in the yard: an active piece named
    /// here is sent back to square 1.
    pub fn move_piece_onto_board(&mut self, id: PieceId) -> Result<(), DomainError> {
        if self.pending_roll != Some(ENTRY_ROLL) {
            return Err(DomainError::MustRollSix);
        }
        self.piece_mut(id)?.enter_track();
        self.pending_roll = None;
        Ok(())
    }

    /// Advances an active piece by the pending roll.
    ///
    /// Inside the home stretch the roll must match the remaining distance
    /// exactly; otherwise the piece stays where it is.
    pub fn move_piece(&mut self, id: PieceId) -> Result<(), DomainError> {
        let pending = self.pending_roll;
        let piece = self.piece_mut(id)?;
        if piece.is_in_yard() || piece.is_in_goal() {
            return Err(DomainError::IllegalPieceState {
                piece: id,
                position: piece.position(),
            });
        }
        let roll = pending.ok_or(DomainError::NoPendingRoll)?;
        if in_home_stretch(piece.position()) && piece.steps_until_goal() != roll {
            return Err(DomainError::OvershootViolation {
                piece: id,
                steps_until_goal: piece.steps_until_goal(),
                roll,
            });
        }
        piece.advance(roll);
        self.pending_roll = None;
        Ok(())
    }

    pub fn show_info(&self) -> String {
        let mut info = String::new();
        for piece in &self.pieces {
            if piece.is_in_yard() {
                let _ = writeln!(
                    info,
                    "The Player's {} piece number {} is in position: 0",
                    self.color,
                    piece.id()
                );
            } else {
                let _ = writeln!(
                    info,
                    "The Player's {} piece number {} is in position: {} and has this many steps until the goal: {}",
                    self.color,
                    piece.id(),
                    piece.position(),
                    piece.steps_until_goal()
                );
            }
        }
        info
    }

    pub fn can_put_piece_in_play(&self, roll: Roll) -> bool {
        roll == ENTRY_ROLL && self.pieces.iter().any(Piece::is_in_yard)
    }

    pub fn can_move_any_pieces(&self, roll: Roll) -> bool {
        self.pieces.iter().any(|p| {
            !p.is_in_yard()
                && !p.is_in_goal()
                && !(in_home_stretch(p.position()) && p.steps_until_goal() != roll)
        })
    }

    pub fn won(&self) -> bool {
        self.pieces.iter().all(Piece::is_in_goal)
    }

    #[cfg(test)]
    pub(crate) fn place_piece(&mut self, id: PieceId, position: crate::domain::rules::Position) {
        if let Ok(piece) = self.piece_mut(id) {
            piece.place(position);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_pending_roll(&mut self, roll: Option<Roll>) {
        self.pending_roll = roll;
    }
}
