//! Frame derivation over the append-only roll log.
//!
//! Frames are never stored. They are recomputed from the log after every
//! accepted roll so there is no per-frame state to drift out of sync.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{FRAMES, PINS};

/// One scoring unit, derived from a contiguous slice of the roll log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// 1-based frame number (1..=10).
    pub frame_no: u8,
    /// Index into the roll log of this frame's first roll.
    pub first_roll: usize,
    /// Pins knocked down by each roll belonging to this frame.
    pub rolls: Vec<u8>,
    pub is_strike: bool,
    pub is_spare: bool,
    /// Whether the log already holds every roll this frame needs.
    pub is_complete: bool,
}

impl Frame {
    pub fn is_tenth(&self) -> bool {
        self.frame_no == FRAMES
    }

    /// Index of the first roll after this frame.
    pub fn next_roll(&self) -> usize {
        self.first_roll + self.rolls.len()
    }

    /// Sum of this frame's own rolls, no bonus.
    pub fn pins_total(&self) -> u16 {
        self.rolls.iter().map(|&p| u16::from(p)).sum()
    }
}

/// Group the roll log into frames 1..=10.
///
/// The last frame in the result may be incomplete. Rolls past a closed tenth
/// frame are ignored; the validator never lets them into the log.
pub fn derive_frames(pins: &[u8]) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(FRAMES as usize);
    let mut idx = 0;

    while idx < pins.len() && frames.len() < FRAMES as usize {
        let frame_no = frames.len() as u8 + 1;
        let frame = if frame_no < FRAMES {
            regular_frame(pins, idx, frame_no)
        } else {
            tenth_frame(pins, idx)
        };
        idx = frame.next_roll();
        frames.push(frame);
    }

    frames
}

fn regular_frame(pins: &[u8], idx: usize, frame_no: u8) -> Frame {
    let first = pins[idx];
    if first == PINS {
        return Frame {
            frame_no,
            first_roll: idx,
            rolls: vec![first],
            is_strike: true,
            is_spare: false,
            is_complete: true,
        };
    }

    match pins.get(idx + 1) {
        Some(&second) => Frame {
            frame_no,
            first_roll: idx,
            rolls: vec![first, second],
            is_strike: false,
            is_spare: u16::from(first) + u16::from(second) == u16::from(PINS),
            is_complete: true,
        },
        None => Frame {
            frame_no,
            first_roll: idx,
            rolls: vec![first],
            is_strike: false,
            is_spare: false,
            is_complete: false,
        },
    }
}

fn tenth_frame(pins: &[u8], idx: usize) -> Frame {
    let available = &pins[idx..];
    let is_strike = available[0] == PINS;
    let is_spare = !is_strike
        && available.len() >= 2
        && u16::from(available[0]) + u16::from(available[1]) == u16::from(PINS);
    let needed = if is_strike || is_spare { 3 } else { 2 };
    let taken = available.len().min(needed);

    Frame {
        frame_no: FRAMES,
        first_roll: idx,
        rolls: available[..taken].to_vec(),
        is_strike,
        is_spare,
        is_complete: taken == needed,
    }
}

/// The game is over exactly when frame 10 is closed.
pub fn is_game_over(frames: &[Frame]) -> bool {
    frames
        .last()
        .is_some_and(|frame| frame.is_tenth() && frame.is_complete)
}
