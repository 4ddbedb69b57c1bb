use crate::repos::{GameStore, PlayerStore};

/// All in-memory repositories, shared by every request.
#[derive(Default)]
pub struct Store {
    pub games: GameStore,
    pub players: PlayerStore,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
