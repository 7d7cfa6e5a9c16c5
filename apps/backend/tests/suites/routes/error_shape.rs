use actix_web::http::header::ContentType;
use actix_web::test;
use ludo_backend::infra::state::build_state;
use uuid::Uuid;

use crate::common::assert_problem;
use crate::support::app_builder::create_test_app;
use crate::support::game_setup::{create_game, get, post};

#[actix_web::test]
async fn malformed_game_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let resp = get(&app, "/api/games/not-a-uuid").await;
    let problem = assert_problem(resp, 400, "INVALID_GAME_ID").await;
    assert!(problem.detail.contains("not-a-uuid"));
    Ok(())
}

#[actix_web::test]
async fn unknown_game_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let resp = post(&app, &format!("/api/games/{}/start", Uuid::new_v4())).await;
    let problem = assert_problem(resp, 404, "GAME_NOT_FOUND").await;
    assert_eq!(problem.title, "Game Not Found");
    Ok(())
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;
    let game_id = create_game(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{game_id}/players"))
        .insert_header(ContentType::json())
        .set_payload("{\"color\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "BAD_REQUEST").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/games/{game_id}/players"))
        .insert_header(ContentType::json())
        .set_payload("{\"colour\": \"red\"}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "BAD_REQUEST").await;
    Ok(())
}

#[actix_web::test]
async fn successful_responses_carry_a_trace_id() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let first = get(&app, "/api/games").await;
    let second = get(&app, "/api/games").await;
    let id = |resp: &actix_web::dev::ServiceResponse| {
        resp.headers()
            .get("x-trace-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let (a, b) = (id(&first), id(&second));
    assert!(a.is_some());
    assert_ne!(a, b, "every request gets its own trace id");
    Ok(())
}
