//! Frame and running scores, with bonuses read lazily from the roll log.

use crate::domain::frames::Frame;

/// Score of a single frame including its bonus, or `None` while pending.
///
/// A frame is pending while it is still open or while the rolls its bonus
/// needs (two for a strike, one for a spare) are not yet in the log. The tenth
/// frame carries its bonus balls inside itself and scores its own pins.
pub fn frame_score(pins: &[u8], frame: &Frame) -> Option<u16> {
    if !frame.is_complete {
        return None;
    }

    let base = frame.pins_total();
    if frame.is_tenth() {
        return Some(base);
    }

    let bonus_rolls = if frame.is_strike {
        2
    } else if frame.is_spare {
        1
    } else {
        0
    };
    let start = frame.next_roll();
    let bonus: u16 = pins
        .get(start..start + bonus_rolls)?
        .iter()
        .map(|&p| u16::from(p))
        .sum();

    Some(base + bonus)
}

/// Running totals for the leading run of scoreable frames.
///
/// Stops at the first pending frame, even if later frames could be scored
/// on their own.
pub fn cumulative_scores(pins: &[u8], frames: &[Frame]) -> Vec<u16> {
    frames
        .iter()
        .map_while(|frame| frame_score(pins, frame))
        .scan(0u16, |total, score| {
            *total += score;
            Some(*total)
        })
        .collect()
}

/// Last running total, 0 before anything is scoreable.
pub fn total_score(cumulative: &[u16]) -> u16 {
    cumulative.last().copied().unwrap_or(0)
}
