//! Game repository: a concurrent map of per-game locked aggregates.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;

use crate::domain::{GameId, GameState, PlayerId};
use crate::errors::domain::DomainError;

pub struct GameStore {
    games: DashMap<GameId, Arc<RwLock<GameState>>>,
    next_id: AtomicI64,
}

impl GameStore {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a fresh game and return a copy of it.
    pub fn create(&self, player_id: PlayerId, owner: &str) -> GameState {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let state = GameState::new(id, player_id, owner);
        self.games
            .insert(id, Arc::new(RwLock::new(state.clone())));
        state
    }

    pub fn exists(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Consistent copy of the game, taken under its read lock.
    pub fn get(&self, id: GameId) -> Result<GameState, DomainError> {
        let slot = self.slot(id)?;
        let state = slot.read().clone();
        Ok(state)
    }

    /// Run `f` under the game's write lock and return its result together
    /// with a copy of the state it left behind.
    ///
    /// `f` must leave the state untouched when it returns an error.
    pub fn update<T>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut GameState) -> Result<T, DomainError>,
    ) -> Result<(T, GameState), DomainError> {
        let slot = self.slot(id)?;
        let mut guard = slot.write();
        let out = f(&mut guard)?;
        Ok((out, guard.clone()))
    }

    // Clone the Arc so the map shard is released before the game lock is taken.
    fn slot(&self, id: GameId) -> Result<Arc<RwLock<GameState>>, DomainError> {
        self.games
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| DomainError::game_not_found(id))
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
