//! Public snapshot API for observing a board without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, Phase};
use crate::domain::piece::Piece;
use crate::domain::player::Player;
use crate::domain::rules::{PieceId, Position, Roll};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub id: PieceId,
    pub position: Position,
    pub steps_until_goal: Position,
    pub in_yard: bool,
    pub in_goal: bool,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            id: piece.id(),
            position: piece.position(),
            steps_until_goal: piece.steps_until_goal(),
            in_yard: piece.is_in_yard(),
            in_goal: piece.is_in_goal(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_roll: Option<Roll>,
    pub pieces: Vec<PieceSnapshot>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            color: player.color().to_string(),
            pending_roll: player.pending_roll(),
            pieces: player.pieces().iter().map(PieceSnapshot::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub phase: Phase,
    pub turn: usize,
    pub current_player: Option<String>,
    pub winner: Option<String>,
    pub players: Vec<PlayerSnapshot>,
}

pub fn snapshot(board: &Board) -> BoardSnapshot {
    BoardSnapshot {
        phase: board.phase(),
        turn: board.turn(),
        current_player: board.current_player().map(|p| p.color().to_string()),
        winner: board.winner().map(str::to_string),
        players: board.players().iter().map(PlayerSnapshot::from).collect(),
    }
}
