// Tracing middleware: every response carries x-request-id, and error bodies
// report that same id.

use actix_web::http::StatusCode;
use bowling_backend::AppState;
use bowling_test_support::assert_problem_details_from_service_response;

use crate::support::{app, get};

#[actix_web::test]
async fn success_has_request_id() {
    let app = app(AppState::for_tests()).await;
    let resp = get(&app, "/health").await;
    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() {
    let app = app(AppState::for_tests()).await;
    let resp = get(&app, "/games/12345").await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header")
        .to_string();

    let problem = assert_problem_details_from_service_response(
        resp,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
    assert_eq!(problem.trace_id, request_id);
}

#[actix_web::test]
async fn each_request_gets_its_own_id() {
    let app = app(AppState::for_tests()).await;
    let a = get(&app, "/health").await;
    let b = get(&app, "/health").await;
    assert_ne!(
        a.headers().get("x-request-id"),
        b.headers().get("x-request-id")
    );
}
