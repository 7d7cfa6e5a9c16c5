//! Turn orchestration on top of the pure board rules.
//!
//! The engine only answers "is there a legal action?"; this service is the
//! caller that acts on the answer: it rejects out-of-turn requests, skips a
//! turn when nothing can move, and declares the winner after a finishing move.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::rules::{PieceId, Position, Roll};
use crate::domain::Board;
use crate::error::AppError;
use crate::errors::{DomainError, ErrorCode};

pub const MAX_COLOR_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    pub roll: Roll,
    /// True when the roll allowed no action and play passed to the next player.
    pub turn_skipped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub piece: PieceId,
    pub position: Position,
    /// The piece left the yard with this move.
    pub entered: bool,
    pub won: bool,
}

/// Trims a requested color and checks it is usable as a player label.
pub fn normalize_color(raw: &str) -> Result<String, AppError> {
    let color = raw.trim();
    if color.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidColor,
            "color must not be empty",
        ));
    }
    if color.chars().count() > MAX_COLOR_LEN {
        return Err(AppError::invalid(
            ErrorCode::InvalidColor,
            format!("color must be at most {MAX_COLOR_LEN} characters"),
        ));
    }
    Ok(color.to_string())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GameFlowService;

impl GameFlowService {
    pub fn new() -> Self {
        Self
    }

    pub fn add_player(&self, game_id: Uuid, board: &mut Board, color: &str) -> Result<(), AppError> {
        let color = normalize_color(color)?;
        board.add_player(color.as_str())?;
        info!(%game_id, color = %color, players = board.players().len(), "player added");
        Ok(())
    }

    pub fn start(&self, game_id: Uuid, board: &mut Board) -> Result<(), AppError> {
        board.start_game()?;
        info!(%game_id, players = board.players().len(), "game started");
        Ok(())
    }

    /// Rolls for `color`. When neither a move nor an entry is possible the
    /// turn passes immediately.
    pub fn roll(&self, game_id: Uuid, board: &mut Board, color: &str) -> Result<RollOutcome, AppError> {
        Self::require_turn(board, color)?;
        let player = Self::current_mut(board)?;
        let roll = player.roll_dice()?;
        let stuck = !player.can_move_any_pieces(roll) && !player.can_put_piece_in_play(roll);
        debug!(%game_id, color, roll, "dice rolled");

        if stuck {
            board.next_turn();
            info!(%game_id, color, roll, "turn skipped, no legal action");
        }

        Ok(RollOutcome {
            roll,
            turn_skipped: stuck,
        })
    }

    /// Plays `piece` with the pending roll: a yard piece enters the track,
    /// any other piece advances. Ends the turn or the game.
    pub fn play(
        &self,
        game_id: Uuid,
        board: &mut Board,
        color: &str,
        piece: PieceId,
    ) -> Result<MoveOutcome, AppError> {
        Self::require_turn(board, color)?;
        let player = Self::current_mut(board)?;
        let entered = player
            .piece(piece)
            .ok_or(DomainError::PieceNotFound(piece))?
            .is_in_yard();

        if entered {
            player.move_piece_onto_board(piece)?;
        } else {
            player.move_piece(piece)?;
        }

        let position = player
            .piece(piece)
            .map(|p| p.position())
            .ok_or(DomainError::PieceNotFound(piece))?;
        let won = player.won();
        debug!(%game_id, color, piece, position, entered, "piece moved");

        if won {
            board.declare_winner(color);
            info!(%game_id, color, "winner declared");
        } else {
            board.next_turn();
        }

        Ok(MoveOutcome {
            piece,
            position,
            entered,
            won,
        })
    }

    /// Guards shared by every in-turn action.
    fn require_turn(board: &Board, color: &str) -> Result<(), AppError> {
        if board.is_game_over() {
            let winner = board.winner().unwrap_or("nobody");
            return Err(AppError::conflict(
                ErrorCode::GameOver,
                format!("Game is over. {winner} won"),
            ));
        }
        if !board.is_game_started() {
            return Err(AppError::conflict(
                ErrorCode::GameNotStarted,
                "the game has not been started",
            ));
        }
        if board.player(color).is_none() {
            return Err(AppError::not_found(
                ErrorCode::PlayerNotFound,
                format!("no player with color {color}"),
            ));
        }
        match board.current_player() {
            Some(current) if current.color() == color => Ok(()),
            Some(current) => Err(AppError::conflict(
                ErrorCode::NotYourTurn,
                format!("it's not your turn, {} is to play", current.color()),
            )),
            None => Err(AppError::internal("started game without players")),
        }
    }

    fn current_mut(board: &mut Board) -> Result<&mut crate::domain::Player, AppError> {
        board
            .current_player_mut()
            .ok_or_else(|| AppError::internal("started game without players"))
    }
}
