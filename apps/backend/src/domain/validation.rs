//! Roll legality checks, run before anything is appended to the log.

use std::fmt;

use crate::domain::frames::Frame;
use crate::domain::rules::{standing_pins, PINS};

/// Why a proposed roll was refused. The log is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollRejection {
    /// Pin count outside 0..=10. Carries the raw input, which may be negative.
    OutOfRange { pins: i64 },
    /// More pins than are standing on the current rack.
    PinsExceedStanding { pins: u8, standing: u8 },
    /// Frame 10 is already closed.
    GameComplete,
}

impl fmt::Display for RollRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pins } => {
                write!(f, "Pin count {pins} is outside 0..={PINS}")
            }
            Self::PinsExceedStanding { pins, standing } => {
                write!(f, "Cannot knock down {pins} pins; only {standing} standing")
            }
            Self::GameComplete => write!(f, "Game is already complete"),
        }
    }
}

impl std::error::Error for RollRejection {}

/// Check a proposed roll against the current frames.
///
/// Range is checked before lifecycle so garbage input is reported as such
/// even on a finished game.
pub fn validate_roll(frames: &[Frame], pins: i64) -> Result<u8, RollRejection> {
    let pins = u8::try_from(pins)
        .ok()
        .filter(|p| *p <= PINS)
        .ok_or(RollRejection::OutOfRange { pins })?;

    let standing = standing_pins(frames).ok_or(RollRejection::GameComplete)?;
    if pins > standing {
        return Err(RollRejection::PinsExceedStanding { pins, standing });
    }

    Ok(pins)
}
