//! Error codes for the bowling backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the bowling backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Player name empty or too long
    InvalidName,
    /// Pin count outside 0..=10
    OutOfRange,
    /// Pin count exceeds the pins left standing in the frame
    PinsExceedStanding,
    /// General bad request error
    BadRequest,
    /// Invalid or missing HTTP header
    InvalidHeader,

    // Resource Not Found
    /// Game not found
    GameNotFound,

    // Lifecycle Conflicts
    /// Roll attempted after the game finished
    GameComplete,
    /// Summary requested before the game finished
    GameNotComplete,
    /// Optimistic lock conflict
    OptimisticLock,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidName => "INVALID_NAME",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::PinsExceedStanding => "PINS_EXCEED_STANDING",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::GameComplete => "GAME_COMPLETE",
            Self::GameNotComplete => "GAME_NOT_COMPLETE",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
