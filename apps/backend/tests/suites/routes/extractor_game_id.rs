// The {game_id} path segment must be a positive integer naming an existing game.

use actix_web::http::StatusCode;
use bowling_backend::AppState;
use bowling_test_support::assert_problem_details_from_service_response;

use crate::support::{app, get};

#[actix_web::test]
async fn non_numeric_id() {
    let app = app(AppState::for_tests()).await;
    let resp = get(&app, "/games/abc").await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_GAME_ID",
        StatusCode::BAD_REQUEST,
        Some("Invalid game id: abc"),
    )
    .await;
}

#[actix_web::test]
async fn non_positive_id() {
    let app = app(AppState::for_tests()).await;
    for uri in ["/games/0", "/games/-3/score"] {
        let resp = get(&app, uri).await;
        assert_problem_details_from_service_response(
            resp,
            "INVALID_GAME_ID",
            StatusCode::BAD_REQUEST,
            Some("must be positive"),
        )
        .await;
    }
}
