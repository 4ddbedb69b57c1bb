use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::domain::GameId;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Game id taken from the `{game_id}` path segment.
///
/// Rejects ids that are not positive integers with `INVALID_GAME_ID` and ids
/// with no game behind them with `GAME_NOT_FOUND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePath(pub GameId);

impl GamePath {
    fn extract(req: &HttpRequest) -> Result<Self, AppError> {
        let raw = req.match_info().get("game_id").ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
        })?;

        let game_id = raw.parse::<GameId>().map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
        })?;

        if game_id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidGameId,
                format!("Game id must be positive, got: {game_id}"),
            ));
        }

        let app_state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not available"))?;

        if !app_state.store().games.exists(game_id) {
            return Err(AppError::not_found(
                ErrorCode::GameNotFound,
                format!("Game {game_id} not found"),
            ));
        }

        Ok(GamePath(game_id))
    }
}

impl FromRequest for GamePath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::extract(req))
    }
}
