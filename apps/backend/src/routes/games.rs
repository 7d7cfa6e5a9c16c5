//! Game-related HTTP routes.
//!
//! Every handler locks its board once, does all of its work synchronously and
//! drops the guard before the response is built.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::rules::{PieceId, Position, Roll};
use crate::domain::snapshot::{snapshot, PieceSnapshot};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{GameRef, ValidatedJson};
use crate::services::game_flow::{GameFlowService, MoveOutcome, RollOutcome};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct GameListResponse {
    games: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
struct GameCreatedResponse {
    game_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub color: String,
}

#[derive(Debug, Serialize)]
struct PlayerAddedResponse {
    color: String,
    players: usize,
}

#[derive(Debug, Serialize)]
struct CurrentPlayerResponse {
    color: String,
}

#[derive(Debug, Serialize)]
struct PlayerInfoResponse {
    color: String,
    pending_roll: Option<Roll>,
    pieces: Vec<PieceSnapshot>,
    info: String,
}

#[derive(Debug, Serialize)]
struct RollResponse {
    roll: Roll,
    turn_skipped: bool,
    message: String,
}

impl From<RollOutcome> for RollResponse {
    fn from(outcome: RollOutcome) -> Self {
        let message = if outcome.turn_skipped {
            format!("You rolled {}. You can't make any moves.", outcome.roll)
        } else {
            format!("You rolled {}, make a move.", outcome.roll)
        };
        Self {
            roll: outcome.roll,
            turn_skipped: outcome.turn_skipped,
            message,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub piece: PieceId,
}

#[derive(Debug, Serialize)]
struct MoveResponse {
    piece: PieceId,
    position: Position,
    won: bool,
    message: String,
}

impl From<MoveOutcome> for MoveResponse {
    fn from(outcome: MoveOutcome) -> Self {
        let message = if outcome.won {
            "YOU HAVE WON THE GAME!".to_string()
        } else if outcome.entered {
            format!("Piece {} is now in play.", outcome.piece)
        } else {
            format!("Piece {} moved to {}.", outcome.piece, outcome.position)
        };
        Self {
            piece: outcome.piece,
            position: outcome.position,
            won: outcome.won,
            message,
        }
    }
}

/// GET /api/games
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GameListResponse {
        games: app_state.registry().list(),
    }))
}

/// POST /api/games
async fn create_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let game_id = app_state.registry().create_game();
    Ok(HttpResponse::Created().json(GameCreatedResponse { game_id }))
}

/// GET /api/games/{game_id}
///
/// Public view of the board: phase, turn, every player's pieces.
async fn get_game(game: GameRef) -> Result<HttpResponse, AppError> {
    let snap = snapshot(&game.board.lock());
    Ok(HttpResponse::Ok().json(snap))
}

/// POST /api/games/{game_id}/start
async fn start_game(game: GameRef) -> Result<HttpResponse, AppError> {
    let snap = {
        let mut board = game.board.lock();
        GameFlowService::new().start(game.id, &mut board)?;
        snapshot(&board)
    };
    Ok(HttpResponse::Ok().json(snap))
}

/// POST /api/games/{game_id}/players
async fn add_player(
    game: GameRef,
    body: ValidatedJson<AddPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let response = {
        let mut board = game.board.lock();
        GameFlowService::new().add_player(game.id, &mut board, &body.color)?;
        PlayerAddedResponse {
            color: body.color.trim().to_string(),
            players: board.players().len(),
        }
    };
    Ok(HttpResponse::Created().json(response))
}

/// GET /api/games/{game_id}/current_player
async fn current_player(game: GameRef) -> Result<HttpResponse, AppError> {
    let board = game.board.lock();
    if !board.is_game_started() {
        return Err(AppError::conflict(
            ErrorCode::GameNotStarted,
            "the game has not been started",
        ));
    }
    let color = board
        .current_player()
        .map(|p| p.color().to_string())
        .ok_or_else(|| AppError::internal("started game without players"))?;
    drop(board);
    Ok(HttpResponse::Ok().json(CurrentPlayerResponse { color }))
}

/// GET /api/games/{game_id}/players/{color}/info
async fn player_info(game: GameRef, path: web::Path<(String, String)>) -> Result<HttpResponse, AppError> {
    let (_, color) = path.into_inner();
    let response = {
        let board = game.board.lock();
        let player = board.player(&color).ok_or_else(|| {
            AppError::not_found(
                ErrorCode::PlayerNotFound,
                format!("no player with color {color}"),
            )
        })?;
        PlayerInfoResponse {
            color: player.color().to_string(),
            pending_roll: player.pending_roll(),
            pieces: player.pieces().iter().map(PieceSnapshot::from).collect(),
            info: player.show_info(),
        }
    };
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/games/{game_id}/players/{color}/roll
async fn roll(game: GameRef, path: web::Path<(String, String)>) -> Result<HttpResponse, AppError> {
    let (_, color) = path.into_inner();
    let outcome = {
        let mut board = game.board.lock();
        GameFlowService::new().roll(game.id, &mut board, &color)?
    };
    Ok(HttpResponse::Ok().json(RollResponse::from(outcome)))
}

/// POST /api/games/{game_id}/players/{color}/move
///
/// A piece still in the yard is put in play; any other piece advances by the
/// pending roll.
async fn move_piece(
    game: GameRef,
    path: web::Path<(String, String)>,
    body: ValidatedJson<MoveRequest>,
) -> Result<HttpResponse, AppError> {
    let (_, color) = path.into_inner();
    let outcome = {
        let mut board = game.board.lock();
        GameFlowService::new().play(game.id, &mut board, &color, body.piece)?
    };
    Ok(HttpResponse::Ok().json(MoveResponse::from(outcome)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    );
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game)));
    cfg.service(web::resource("/{game_id}/start").route(web::post().to(start_game)));
    cfg.service(web::resource("/{game_id}/players").route(web::post().to(add_player)));
    cfg.service(
        web::resource("/{game_id}/current_player").route(web::get().to(current_player)),
    );
    cfg.service(
        web::resource("/{game_id}/players/{color}/info").route(web::get().to(player_info)),
    );
    cfg.service(web::resource("/{game_id}/players/{color}/roll").route(web::post().to(roll)));
    cfg.service(
        web::resource("/{game_id}/players/{color}/move").route(web::post().to(move_piece)),
    );
}
