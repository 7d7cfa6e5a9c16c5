use crate::common::{assert_problem, read_ok_json};
use crate::support::app_builder::create_test_app;
use crate::support::game_setup::{
    get, move_piece, roll, seat_and_start, state_with_scripted_game,
};

#[actix_web::test]
async fn six_puts_a_piece_in_play_then_the_turn_passes() -> Result<(), Box<dyn std::error::Error>> {
    let (state, id) = state_with_scripted_game(&[6]);
    let app = create_test_app(state).with_prod_routes().build().await?;
    let game_id = id.to_string();
    seat_and_start(&app, &game_id, &["red", "blue"]).await;

    let rolled = read_ok_json(roll(&app, &game_id, "red").await, 200).await;
    assert_eq!(rolled["roll"], 6);
    assert_eq!(rolled["turn_skipped"], false);
    assert_eq!(rolled["message"], "You rolled 6, make a move.");

    let moved = read_ok_json(move_piece(&app, &game_id, "red", 1).await, 200).await;
    assert_eq!(moved["piece"], 1);
    assert_eq!(moved["position"], 1);
    assert_eq!(moved["won"], false);

    let current = read_ok_json(
        get(&app, &format!("/api/games/{game_id}/current_player")).await,
        200,
    )
    .await;
    assert_eq!(current["color"], "blue");

    let snap = read_ok_json(get(&app, &format!("/api/games/{game_id}")).await, 200).await;
    assert_eq!(snap["players"][0]["pieces"][0]["position"], 1);
    assert_eq!(snap["players"][0]["pieces"][0]["steps_until_goal"], 62);
    Ok(())
}

#[actix_web::test]
async fn a_roll_with_nothing_to_do_skips_the_turn() -> Result<(), Box<dyn std::error::Error>> {
    let (state, id) = state_with_scripted_game(&[3]);
    let app = create_test_app(state).with_prod_routes().build().await?;
    let game_id = id.to_string();
    seat_and_start(&app, &game_id, &["red", "blue"]).await;

    let rolled = read_ok_json(roll(&app, &game_id, "red").await, 200).await;
    assert_eq!(rolled["roll"], 3);
    assert_eq!(rolled["turn_skipped"], true);
    assert!(rolled["message"]
        .as_str()
        .is_some_and(|m| m.contains("can't make any moves")));

    let current = read_ok_json(
        get(&app, &format!("/api/games/{game_id}/current_player")).await,
        200,
    )
    .await;
    assert_eq!(current["color"], "blue");
    Ok(())
}

#[actix_web::test]
async fn only_the_current_player_may_act() -> Result<(), Box<dyn std::error::Error>> {
    let (state, id) = state_with_scripted_game(&[6]);
    let app = create_test_app(state).with_prod_routes().build().await?;
    let game_id = id.to_string();
    seat_and_start(&app, &game_id, &["red", "blue"]).await;

    let problem = assert_problem(roll(&app, &game_id, "blue").await, 409, "NOT_YOUR_TURN").await;
    assert!(problem.detail.contains("red"));
    assert_problem(move_piece(&app, &game_id, "blue", 1).await, 409, "NOT_YOUR_TURN").await;
    assert_problem(roll(&app, &game_id, "green").await, 404, "PLAYER_NOT_FOUND").await;
    Ok(())
}

#[actix_web::test]
async fn rolling_twice_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    let (state, id) = state_with_scripted_game(&[6]);
    let app = create_test_app(state).with_prod_routes().build().await?;
    let game_id = id.to_string();
    seat_and_start(&app, &game_id, &["red", "blue"]).await;

    read_ok_json(roll(&app, &game_id, "red").await, 200).await;
    assert_problem(roll(&app, &game_id, "red").await, 409, "ALREADY_ROLLED").await;
    Ok(())
}

#[actix_web::test]
async fn yard_pieces_need_a_six() -> Result<(), Box<dyn std::error::Error>> {
    // red: 6 (enter), blue: 4 (stuck, skipped), red: 4
    let (state, id) = state_with_scripted_game(&[6, 4, 4]);
    let app = create_test_app(state).with_prod_routes().build().await?;
    let game_id = id.to_string();
    seat_and_start(&app, &game_id, &["red", "blue"]).await;

    assert_problem(move_piece(&app, &game_id, "red", 1).await, 400, "MUST_ROLL_SIX").await;

    read_ok_json(roll(&app, &game_id, "red").await, 200).await;
    read_ok_json(move_piece(&app, &game_id, "red", 1).await, 200).await;

    let skipped = read_ok_json(roll(&app, &game_id, "blue").await, 200).await;
    assert_eq!(skipped["turn_skipped"], true);

    let rolled = read_ok_json(roll(&app, &game_id, "red").await, 200).await;
    assert_eq!(rolled["roll"], 4);
    assert_eq!(rolled["turn_skipped"], false);

    assert_problem(move_piece(&app, &game_id, "red", 2).await, 400, "MUST_ROLL_SIX").await;
    assert_problem(move_piece(&app, &game_id, "red", 9).await, 404, "PIECE_NOT_FOUND").await;

    let moved = read_ok_json(move_piece(&app, &game_id, "red", 1).await, 200).await;
    assert_eq!(moved["position"], 5);
    assert_eq!(moved["message"], "Piece 1 moved to 5.");
    Ok(())
}
