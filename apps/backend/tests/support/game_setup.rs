//! HTTP-level helpers for getting a game into a known state.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use ludo_backend::domain::{Board, Dice};
use ludo_backend::infra::state::build_state;
use ludo_backend::state::app_state::AppState;
use serde_json::{json, Value};
use uuid::Uuid;

pub async fn get<S>(app: &S, uri: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await
}

pub async fn post<S>(app: &S, uri: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    test::call_service(app, test::TestRequest::post().uri(uri).to_request()).await
}

pub async fn post_json<S>(app: &S, uri: &str, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    test::call_service(app, req).await
}

/// Creates a game over HTTP and returns its id.
pub async fn create_game<S>(app: &S) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = post(app, "/api/games").await;
    assert_eq!(resp.status().as_u16(), 201);
    let json: Value = test::read_body_json(resp).await;
    json["game_id"]
        .as_str()
        .expect("game_id should be a string")
        .to_string()
}

pub async fn add_player<S>(app: &S, game_id: &str, color: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    post_json(
        app,
        &format!("/api/games/{game_id}/players"),
        json!({ "color": color }),
    )
    .await
}

/// Seats `colors` in order and starts the game.
pub async fn seat_and_start<S>(app: &S, game_id: &str, colors: &[&str])
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    for color in colors {
        let resp = add_player(app, game_id, color).await;
        assert_eq!(resp.status().as_u16(), 201, "seating {color}");
    }
    let resp = post(app, &format!("/api/games/{game_id}/start")).await;
    assert_eq!(resp.status().as_u16(), 200);
}

pub async fn roll<S>(app: &S, game_id: &str, color: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    post(app, &format!("/api/games/{game_id}/players/{color}/roll")).await
}

pub async fn move_piece<S>(app: &S, game_id: &str, color: &str, piece: u8) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    post_json(
        app,
        &format!("/api/games/{game_id}/players/{color}/move"),
        json!({ "piece": piece }),
    )
    .await
}

/// Fresh state holding one board whose die repeats `faces`.
pub fn state_with_scripted_game(faces: &[u8]) -> (AppState, Uuid) {
    let state = build_state().build();
    let dice = Dice::scripted(faces.iter().copied()).expect("faces should be 1..=6");
    let id = state.registry().insert(Board::with_dice(dice));
    (state, id)
}
