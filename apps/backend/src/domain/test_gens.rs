// Proptest generators for roll logs.
// Logs are legal by construction: each roll is drawn from 0..=standing_pins.

use proptest::prelude::*;

use crate::domain::frames::derive_frames;
use crate::domain::rules::standing_pins;

/// One uniform draw per roll, scaled onto whatever is legal at that point.
fn draws() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 21)
}

/// Build the legal log a sequence of raw draws maps to, stopping after `limit` rolls.
pub fn legal_log_from(draws: &[u8], limit: usize) -> Vec<u8> {
    let mut pins = Vec::new();
    for &draw in draws.iter().take(limit) {
        let Some(standing) = standing_pins(&derive_frames(&pins)) else {
            break;
        };
        pins.push(draw % (standing + 1));
    }
    pins
}

/// A complete, legal game.
pub fn finished_game() -> impl Strategy<Value = Vec<u8>> {
    draws().prop_map(|d| legal_log_from(&d, usize::MAX))
}

/// A legal game stopped somewhere before or at its end.
pub fn partial_game() -> impl Strategy<Value = Vec<u8>> {
    (draws(), 0usize..=21).prop_map(|(d, limit)| legal_log_from(&d, limit))
}
