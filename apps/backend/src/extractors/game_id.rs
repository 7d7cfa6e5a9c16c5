use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;
use crate::state::game_registry::GameHandle;

/// The game named by the `{game_id}` path segment.
///
/// Extraction fails with `INVALID_GAME_ID` for a malformed id and
/// `GAME_NOT_FOUND` when the registry has no such game.
#[derive(Debug, Clone)]
pub struct GameRef {
    pub id: Uuid,
    pub board: GameHandle,
}

fn extract(req: &HttpRequest) -> Result<GameRef, AppError> {
    let raw = req.match_info().get("game_id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
    })?;

    let id = Uuid::parse_str(raw).map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
    })?;

    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let board = app_state
        .registry()
        .get(&id)
        .ok_or_else(|| AppError::not_found(ErrorCode::GameNotFound, format!("Game {id} not found")))?;

    tracing::Span::current().record("game_id", tracing::field::display(id));
    Ok(GameRef { id, board })
}

impl FromRequest for GameRef {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}
