//! Game session service: the operations behind the `/games` routes.
//!
//! Every mutation runs inside `GameStore::update`, so validation and the
//! append see the same log.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{render_text, snapshot, summarize, GameId, GameSnapshot, GameState, GameSummary};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::infra::store::Store;
use crate::repos::Player;
use crate::services::players::PlayerService;

/// Result of logging in: the (possibly existing) player and their new game.
#[derive(Debug, Clone, Serialize)]
pub struct NewGame {
    pub player: Player,
    pub game: GameSnapshot,
}

/// Narrative plus the structured breakdown it was rendered from.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub response: String,
    pub summary: GameSummary,
}

pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    pub fn create_game(&self, store: &Store, name: &str) -> Result<NewGame, DomainError> {
        let player = PlayerService::new().find_or_create(&store.players, name)?;
        let game = store.games.create(player.id, &player.name);
        info!(game_id = game.id, player_id = player.id, "game created");

        Ok(NewGame {
            player,
            game: snapshot(&game),
        })
    }

    /// Validate and append one roll.
    ///
    /// With `expected_version`, the roll only applies if the game is still at
    /// that version.
    pub fn record_roll(
        &self,
        store: &Store,
        game_id: GameId,
        pins: i64,
        expected_version: Option<i32>,
    ) -> Result<GameSnapshot, DomainError> {
        let result = store.games.update(game_id, |game| {
            check_version(game, expected_version)?;
            game.record_roll(pins).map_err(DomainError::from)
        });

        match result {
            Ok((roll, game)) => {
                debug!(
                    game_id,
                    seq = roll.seq,
                    pins = roll.pins,
                    version = game.version,
                    "roll recorded"
                );
                Ok(snapshot(&game))
            }
            Err(err) => {
                info!(game_id, pins, error = %err, "roll rejected");
                Err(err)
            }
        }
    }

    pub fn get_state(&self, store: &Store, game_id: GameId) -> Result<GameSnapshot, DomainError> {
        Ok(snapshot(&store.games.get(game_id)?))
    }

    /// Current settled total.
    pub fn get_score(&self, store: &Store, game_id: GameId) -> Result<u16, DomainError> {
        Ok(store.games.get(game_id)?.total_score())
    }

    /// Summary of a finished game.
    pub fn get_summary(&self, store: &Store, game_id: GameId) -> Result<SummaryReport, DomainError> {
        let game = store.games.get(game_id)?;
        if !game.is_game_over() {
            return Err(DomainError::conflict(
                ConflictKind::GameNotComplete,
                format!("Game {game_id} is still in progress"),
            ));
        }

        let summary = summarize(&game);
        Ok(SummaryReport {
            response: render_text(&summary),
            summary,
        })
    }

    /// Clear the roll log. The game keeps its id and owner.
    pub fn restart(
        &self,
        store: &Store,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameSnapshot, DomainError> {
        let ((), game) = store.games.update(game_id, |game| {
            check_version(game, expected_version)?;
            game.restart();
            Ok(())
        })?;
        info!(game_id, version = game.version, "game restarted");
        Ok(snapshot(&game))
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

fn check_version(game: &GameState, expected: Option<i32>) -> Result<(), DomainError> {
    match expected {
        Some(expected) if expected != game.version => Err(DomainError::conflict(
            ConflictKind::OptimisticLock,
            format!(
                "Game {} is at version {}, expected {expected}",
                game.id, game.version
            ),
        )),
        _ => Ok(()),
    }
}
