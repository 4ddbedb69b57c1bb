//! ETag helpers for conditional game requests.
//!
//! `GET /games/{id}` honours `If-None-Match`; mutating routes honour
//! `If-Match` as compare-and-append against the game's version.

use actix_web::http::header;
use actix_web::HttpRequest;

use crate::domain::GameId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Format: `"game-{id}-v{version}"` (quoted, as HTTP requires).
pub fn game_etag(id: GameId, version: i32) -> String {
    format!(r#""game-{id}-v{version}""#)
}

/// Split a game ETag into `(id, version)`.
pub fn parse_game_etag(s: &str) -> Result<(GameId, i32), AppError> {
    let raw = s.trim().trim_start_matches("W/").trim_matches('"');

    let invalid = || {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Invalid ETag format: expected \"game-{{id}}-v{{version}}\", got: \"{raw}\""),
        )
    };

    let rest = raw.strip_prefix("game-").ok_or_else(invalid)?;
    let (id, version) = rest.rsplit_once("-v").ok_or_else(invalid)?;
    let id = id.parse::<GameId>().map_err(|_| invalid())?;
    let version = version.parse::<i32>().map_err(|_| invalid())?;

    Ok((id, version))
}

/// Version demanded by `If-Match`, if the header is present.
///
/// An ETag naming a different game can never match, so it is reported as a
/// stale version.
pub fn expected_version(req: &HttpRequest, game_id: GameId) -> Result<Option<i32>, AppError> {
    let Some(value) = req.headers().get(header::IF_MATCH) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidHeader, "If-Match header is not valid ASCII")
    })?;

    let (etag_game, version) = parse_game_etag(value)?;
    if etag_game != game_id {
        return Err(AppError::conflict(
            ErrorCode::OptimisticLock,
            format!("If-Match names game {etag_game}, not game {game_id}"),
        ));
    }

    Ok(Some(version))
}

/// Whether `If-None-Match` already names `etag` (or `*`).
pub fn not_modified(req: &HttpRequest, etag: &str) -> bool {
    req.headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| {
            v.split(',')
                .map(str::trim)
                .any(|candidate| candidate == "*" || candidate == etag)
        })
}
