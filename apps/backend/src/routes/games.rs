//! Game HTTP routes, mounted under `/games`.
//!
//! Handlers stay thin: parse, call `GameService`, attach the ETag.

use actix_web::http::header::ETAG;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::GameSnapshot;
use crate::error::AppError;
use crate::extractors::{GamePath, ValidatedJson};
use crate::http::etag::{expected_version, game_etag, not_modified};
use crate::services::games::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RollRequest {
    pub pins: i64,
}

#[derive(Debug, Serialize)]
struct ScoreResponse {
    score: u16,
}

fn with_etag(snapshot: GameSnapshot) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((ETAG, game_etag(snapshot.id, snapshot.version)))
        .json(snapshot)
}

/// POST /games
///
/// Logs the player in by name (reusing an existing player) and starts a new game.
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let created = GameService::new().create_game(app_state.store(), &body.name)?;
    let etag = game_etag(created.game.id, created.game.version);

    Ok(HttpResponse::Created()
        .insert_header((ETAG, etag))
        .json(created))
}

/// GET /games/{game_id}
///
/// Full game view. `If-None-Match` with the current ETag yields `304 Not Modified`.
async fn get_game(
    http_req: HttpRequest,
    game_id: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = GameService::new().get_state(app_state.store(), game_id.0)?;
    let etag = game_etag(snapshot.id, snapshot.version);

    if not_modified(&http_req, &etag) {
        return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
            .insert_header((ETAG, etag))
            .finish());
    }

    Ok(with_etag(snapshot))
}

/// POST /games/{game_id}/rolls
///
/// Records one roll. With `If-Match`, only applies if the game is unchanged.
async fn record_roll(
    http_req: HttpRequest,
    game_id: GamePath,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RollRequest>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req, game_id.0)?;
    let snapshot =
        GameService::new().record_roll(app_state.store(), game_id.0, body.pins, expected)?;
    Ok(with_etag(snapshot))
}

/// POST /games/{game_id}/restart
async fn restart_game(
    http_req: HttpRequest,
    game_id: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(&http_req, game_id.0)?;
    let snapshot = GameService::new().restart(app_state.store(), game_id.0, expected)?;
    Ok(with_etag(snapshot))
}

/// GET /games/{game_id}/score
async fn get_score(
    game_id: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let score = GameService::new().get_score(app_state.store(), game_id.0)?;
    Ok(HttpResponse::Ok().json(ScoreResponse { score }))
}

/// GET /games/{game_id}/summary
///
/// Only available once the game is over.
async fn get_summary(
    game_id: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let report = GameService::new().get_summary(app_state.store(), game_id.0)?;
    Ok(HttpResponse::Ok().json(report))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game)));
    cfg.service(web::resource("/{game_id}/rolls").route(web::post().to(record_roll)));
    cfg.service(web::resource("/{game_id}/restart").route(web::post().to(restart_game)));
    cfg.service(web::resource("/{game_id}/score").route(web::get().to(get_score)));
    cfg.service(web::resource("/{game_id}/summary").route(web::get().to(get_summary)));
}
