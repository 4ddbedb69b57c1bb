//! Domain-level error type used across services and repos.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::validation::RollRejection;

/// Input or rules violations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Pin count outside 0..=10.
    OutOfRange,
    /// Pin count larger than the pins still standing in the frame.
    PinsExceedStanding,
    /// Player name empty or too long.
    InvalidName,
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
}

/// Operation not allowed in the game's current lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Roll attempted after frame 10 closed.
    GameComplete,
    /// Summary requested before frame 10 closed.
    GameNotComplete,
    /// Caller's expected version does not match the stored one.
    OptimisticLock,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Lifecycle conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn game_not_found(game_id: i64) -> Self {
        Self::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    }
}

impl From<RollRejection> for DomainError {
    fn from(rejection: RollRejection) -> Self {
        let detail = rejection.to_string();
        match rejection {
            RollRejection::OutOfRange { .. } => {
                DomainError::validation(ValidationKind::OutOfRange, detail)
            }
            RollRejection::PinsExceedStanding { .. } => {
                DomainError::validation(ValidationKind::PinsExceedStanding, detail)
            }
            RollRejection::GameComplete => {
                DomainError::conflict(ConflictKind::GameComplete, detail)
            }
        }
    }
}
