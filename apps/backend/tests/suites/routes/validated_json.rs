// Malformed request bodies render as BAD_REQUEST problem details.

use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::test;
use bowling_backend::AppState;
use bowling_test_support::assert_problem_details_from_service_response;

use crate::support::{app, new_game_id};

async fn post_raw<S>(app: &S, uri: &str, body: &'static str) -> actix_web::dev::ServiceResponse
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload(body)
        .to_request();
    test::call_service(app, req).await
}

#[actix_web::test]
async fn syntax_error() {
    let app = app(AppState::for_tests()).await;
    let id = new_game_id(&app, "Ada").await;

    let resp = post_raw(&app, &format!("/games/{id}/rolls"), r#"{"pins": }"#).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;
}

#[actix_web::test]
async fn wrong_type() {
    let app = app(AppState::for_tests()).await;
    let id = new_game_id(&app, "Ada").await;

    let resp = post_raw(&app, &format!("/games/{id}/rolls"), r#"{"pins": "ten"}"#).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("wrong types"),
    )
    .await;
}

#[actix_web::test]
async fn missing_field_and_empty_body() {
    let app = app(AppState::for_tests()).await;

    let resp = post_raw(&app, "/games", r#"{}"#).await;
    assert_problem_details_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None)
        .await;

    let resp = post_raw(&app, "/games", "").await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("unexpected end of input"),
    )
    .await;
}
