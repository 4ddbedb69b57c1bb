//! The game aggregate: identity, version and the append-only roll log.

use serde::{Deserialize, Serialize};

use crate::domain::frames::{derive_frames, is_game_over, Frame};
use crate::domain::scoring::{cumulative_scores, total_score};
use crate::domain::validation::{validate_roll, RollRejection};

pub type GameId = i64;
pub type PlayerId = i64;

/// Where the next ball goes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Phase {
    /// Waiting for `roll` (1-based) of `frame` (1..=10).
    Open { frame: u8, roll: u8 },
    /// Frame 10 closed. Only a restart leaves this phase.
    Complete,
}

impl Phase {
    pub fn of(frames: &[Frame]) -> Self {
        if is_game_over(frames) {
            return Phase::Complete;
        }
        match frames.last() {
            Some(last) if !last.is_complete => Phase::Open {
                frame: last.frame_no,
                roll: last.rolls.len() as u8 + 1,
            },
            _ => Phase::Open {
                frame: frames.len() as u8 + 1,
                roll: 1,
            },
        }
    }
}

/// One accepted ball. Immutable once in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub seq: usize,
    pub pins: u8,
}

/// Aggregate root for a single game.
///
/// The roll log is the only stored game data; frames, scores and phase are
/// recomputed from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub id: GameId,
    pub player_id: PlayerId,
    pub owner: String,
    /// Bumped by every accepted mutation.
    pub version: i32,
    rolls: Vec<Roll>,
}

impl GameState {
    pub fn new(id: GameId, player_id: PlayerId, owner: impl Into<String>) -> Self {
        Self {
            id,
            player_id,
            owner: owner.into(),
            version: 1,
            rolls: Vec::new(),
        }
    }

    pub fn total_rolls(&self) -> usize {
        self.rolls.len()
    }

    /// Flat pin counts in log order.
    pub fn pins(&self) -> Vec<u8> {
        self.rolls.iter().map(|r| r.pins).collect()
    }

    pub fn frames(&self) -> Vec<Frame> {
        derive_frames(&self.pins())
    }

    pub fn cumulative_scores(&self) -> Vec<u16> {
        cumulative_scores(&self.pins(), &self.frames())
    }

    pub fn total_score(&self) -> u16 {
        total_score(&self.cumulative_scores())
    }

    pub fn is_game_over(&self) -> bool {
        is_game_over(&self.frames())
    }

    pub fn phase(&self) -> Phase {
        Phase::of(&self.frames())
    }

    /// Validate and append one roll. On rejection nothing changes.
    pub fn record_roll(&mut self, pins: i64) -> Result<Roll, RollRejection> {
        let pins = validate_roll(&self.frames(), pins)?;
        let roll = Roll {
            seq: self.rolls.len(),
            pins,
        };
        self.rolls.push(roll);
        self.version += 1;
        Ok(roll)
    }

    /// Empty the log, keeping id and owner.
    pub fn restart(&mut self) {
        self.rolls.clear();
        self.version += 1;
    }
}
