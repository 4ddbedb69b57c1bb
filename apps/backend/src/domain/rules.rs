//! Bowling constants and the rule for how many pins the next ball may take.

use crate::domain::frames::Frame;

pub const FRAMES: u8 = 10;
pub const PINS: u8 = 10;
/// Nine open frames plus a tenth frame with a bonus ball.
pub const MAX_ROLLS: usize = 21;
pub const MAX_SCORE: u16 = 300;

/// Largest legal pin count for the next roll, or `None` once frame 10 is closed.
///
/// The validator rejects anything above it and the snapshot publishes it as
/// `maxPins`.
pub fn standing_pins(frames: &[Frame]) -> Option<u8> {
    match frames.last() {
        None => Some(PINS),
        Some(frame) if !frame.is_complete => Some(standing_in_open_frame(frame)),
        Some(frame) if frame.frame_no >= FRAMES => None,
        Some(_) => Some(PINS),
    }
}

fn standing_in_open_frame(frame: &Frame) -> u8 {
    match frame.rolls.as_slice() {
        [] => PINS,
        // Frames 1-9 close on a strike, so a single roll here is never 10
        // outside the tenth frame.
        [first] if frame.is_tenth() && *first == PINS => PINS,
        [first] => PINS.saturating_sub(*first),
        // Tenth frame, bonus ball pending. After a strike the second and third
        // balls share a rack unless the second was also a strike; after a spare
        // the rack is reset.
        [first, second] if *first == PINS && *second < PINS => PINS.saturating_sub(*second),
        [_, _] => PINS,
        _ => 0,
    }
}
