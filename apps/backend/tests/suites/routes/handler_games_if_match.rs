// ETag / If-Match / If-None-Match behaviour on the game endpoints.
//
// - every view carries ETag "game-{id}-v{version}", bumped per accepted roll
// - GET with matching If-None-Match returns 304
// - POST rolls with matching If-Match succeeds; stale If-Match returns 409
// - malformed If-Match returns 400 INVALID_HEADER

use actix_web::http::header::{IF_MATCH, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::test;
use bowling_backend::AppState;
use bowling_test_support::assert_problem_details_from_service_response;
use serde_json::Value;

use crate::support::{app, etag_of, get, new_game_id, post_roll, post_roll_if_match};

#[actix_web::test]
async fn etag_tracks_version() {
    let app = app(AppState::for_tests()).await;
    let id = new_game_id(&app, "Ada").await;

    let resp = get(&app, &format!("/games/{id}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(etag_of(&resp), format!("\"game-{id}-v1\""));

    let resp = post_roll(&app, id, 4).await;
    assert_eq!(etag_of(&resp), format!("\"game-{id}-v2\""));
    let view: Value = test::read_body_json(resp).await;
    assert_eq!(view["version"], 2);
}

#[actix_web::test]
async fn if_none_match_returns_304() {
    let app = app(AppState::for_tests()).await;
    let id = new_game_id(&app, "Ada").await;
    let etag = etag_of(&get(&app, &format!("/games/{id}")).await);

    let req = test::TestRequest::get()
        .uri(&format!("/games/{id}"))
        .insert_header((IF_NONE_MATCH, etag.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(etag_of(&resp), etag);
    assert!(test::read_body(resp).await.is_empty());

    // A roll changes the version, so the old tag no longer matches.
    post_roll(&app, id, 1).await;
    let req = test::TestRequest::get()
        .uri(&format!("/games/{id}"))
        .insert_header((IF_NONE_MATCH, etag.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn if_match_current_version_applies() {
    let app = app(AppState::for_tests()).await;
    let id = new_game_id(&app, "Ada").await;
    let etag = etag_of(&get(&app, &format!("/games/{id}")).await);

    let resp = post_roll_if_match(&app, id, 6, &etag).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(etag_of(&resp), format!("\"game-{id}-v2\""));
}

#[actix_web::test]
async fn stale_if_match_is_conflict_and_changes_nothing() {
    let app = app(AppState::for_tests()).await;
    let id = new_game_id(&app, "Ada").await;
    let stale = etag_of(&get(&app, &format!("/games/{id}")).await);
    post_roll(&app, id, 2).await;

    let resp = post_roll_if_match(&app, id, 3, &stale).await;
    assert_problem_details_from_service_response(
        resp,
        "OPTIMISTIC_LOCK",
        StatusCode::CONFLICT,
        Some("expected 1"),
    )
    .await;

    let view: Value = test::read_body_json(get(&app, &format!("/games/{id}")).await).await;
    assert_eq!(view["pins"], serde_json::json!([2]));
}

#[actix_web::test]
async fn malformed_if_match_is_bad_header() {
    let app = app(AppState::for_tests()).await;
    let id = new_game_id(&app, "Ada").await;

    let req = test::TestRequest::post()
        .uri(&format!("/games/{id}/rolls"))
        .insert_header((IF_MATCH, "\"not-an-etag\""))
        .set_json(serde_json::json!({ "pins": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_HEADER",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn restart_honours_if_match() {
    let app = app(AppState::for_tests()).await;
    let id = new_game_id(&app, "Ada").await;
    post_roll(&app, id, 5).await;

    let req = test::TestRequest::post()
        .uri(&format!("/games/{id}/restart"))
        .insert_header((IF_MATCH, format!("\"game-{id}-v1\"")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
