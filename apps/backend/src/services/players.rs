//! Player domain service.

use unicode_normalization::UnicodeNormalization;

use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::{Player, PlayerStore};

pub const MAX_NAME_CHARS: usize = 64;

/// Lookup key for a player name: trimmed, NFKC normalized, lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().nfkc().collect::<String>().to_lowercase()
}

/// Display form of a name, trimmed and NFKC normalized, after length checks.
pub fn validate_display_name(name: &str) -> Result<String, DomainError> {
    let display: String = name.trim().nfkc().collect();
    if display.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            "Name must not be empty",
        ));
    }
    let chars = display.chars().count();
    if chars > MAX_NAME_CHARS {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            format!("Name must be at most {MAX_NAME_CHARS} characters, got {chars}"),
        ));
    }
    Ok(display)
}

/// Player domain service.
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Reuse the player registered under this name, or register a new one.
    pub fn find_or_create(&self, players: &PlayerStore, name: &str) -> Result<Player, DomainError> {
        let display = validate_display_name(name)?;
        let (player, created) = players.find_or_create(normalize_name(&display), &display);
        if created {
            tracing::info!(player_id = player.id, "player registered");
        }
        Ok(player)
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}
