//! Public snapshot API for observing a game without exposing the aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::frames::{is_game_over, Frame};
use crate::domain::rules::standing_pins;
use crate::domain::scoring::{cumulative_scores, total_score};
use crate::domain::state::{GameId, GameState, Phase, PlayerId};

/// One scorecard box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameView {
    pub frame_no: u8,
    pub rolls: Vec<u8>,
    pub is_strike: bool,
    pub is_spare: bool,
    pub is_complete: bool,
    /// Running total through this frame, null while pending.
    pub score: Option<u16>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub id: GameId,
    pub player_id: PlayerId,
    pub owner: String,
    pub version: i32,
    pub frames: Vec<FrameView>,
    pub cumulative_scores: Vec<u16>,
    pub total_score: u16,
    pub game_over: bool,
    pub pins: Vec<u8>,
    pub rolls: usize,
    pub phase: Phase,
    pub max_pins: Option<u8>,
}

/// Produce a consistent snapshot of the whole game.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let pins = state.pins();
    let frames = state.frames();
    let cumulative = cumulative_scores(&pins, &frames);

    GameSnapshot {
        id: state.id,
        player_id: state.player_id,
        owner: state.owner.clone(),
        version: state.version,
        frames: frame_views(&frames, &cumulative),
        total_score: total_score(&cumulative),
        game_over: is_game_over(&frames),
        rolls: state.total_rolls(),
        phase: Phase::of(&frames),
        max_pins: standing_pins(&frames),
        cumulative_scores: cumulative,
        pins,
    }
}

fn frame_views(frames: &[Frame], cumulative: &[u16]) -> Vec<FrameView> {
    frames
        .iter()
        .enumerate()
        .map(|(i, frame)| FrameView {
            frame_no: frame.frame_no,
            rolls: frame.rolls.clone(),
            is_strike: frame.is_strike,
            is_spare: frame.is_spare,
            is_complete: frame.is_complete,
            score: cumulative.get(i).copied(),
        })
        .collect()
}
