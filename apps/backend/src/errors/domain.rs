//! Domain-level error type raised by the game engine.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation in `error.rs`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::rules::{PieceId, Position, Roll};

/// Every way an engine operation can be refused.
///
/// A failed operation never mutates the board, so callers can branch on the
/// variant and carry on with the same game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A roll is already pending for this player.
    AlreadyRolled,
    /// A piece may only leave the yard on a six.
    MustRollSix,
    /// The piece is in the yard or already in the goal.
    IllegalPieceState { piece: PieceId, position: Position },
    /// The piece is in the home stretch and the roll would not land exactly on the goal.
    OvershootViolation {
        piece: PieceId,
        steps_until_goal: Position,
        roll: Roll,
    },
    /// A move was requested without a pending roll.
    NoPendingRoll,
    /// No piece with this id belongs to the player.
    PieceNotFound(PieceId),
    DuplicateColor(String),
    PlayerLimitExceeded,
    GameAlreadyStarted,
    InsufficientPlayers { present: usize },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::AlreadyRolled => write!(f, "you have already rolled the dice"),
            DomainError::MustRollSix => write!(
                f,
                "you have to roll a 6 to move a new piece onto the board"
            ),
            DomainError::IllegalPieceState { piece, position } => write!(
                f,
                "piece {piece} can not be moved from position {position}"
            ),
            DomainError::OvershootViolation {
                piece,
                steps_until_goal,
                roll,
            } => write!(
                f,
                "piece {piece} needs exactly {steps_until_goal} to reach the goal, rolled {roll}"
            ),
            DomainError::NoPendingRoll => write!(f, "roll the dice before moving"),
            DomainError::PieceNotFound(id) => write!(f, "no piece with id {id}"),
            DomainError::DuplicateColor(color) => write!(f, "color {color} is taken"),
            DomainError::PlayerLimitExceeded => {
                write!(f, "there are already four players in the game")
            }
            DomainError::GameAlreadyStarted => {
                write!(f, "can't add a player to a running game")
            }
            DomainError::InsufficientPlayers { present } => write!(
                f,
                "not enough players to start the game ({present} present, 2 required)"
            ),
        }
    }
}

impl Error for DomainError {}
