//! Player repository keyed by normalized name.

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

pub struct PlayerStore {
    by_key: DashMap<String, Player>,
    next_id: AtomicI64,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self {
            by_key: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Return the player registered under `key`, creating it with `name` if absent.
    ///
    /// The second element is true when the player was created by this call.
    pub fn find_or_create(&self, key: String, name: &str) -> (Player, bool) {
        let mut created = false;
        let player = self
            .by_key
            .entry(key)
            .or_insert_with(|| {
                created = true;
                Player {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed),
                    name: name.to_string(),
                }
            })
            .clone();
        (player, created)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}
