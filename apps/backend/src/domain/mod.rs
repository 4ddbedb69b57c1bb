//! Domain layer: pure bowling rules over an append-only roll log.

pub mod frames;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod summary;
pub mod validation;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use frames::{derive_frames, is_game_over, Frame};
pub use rules::standing_pins;
pub use scoring::{cumulative_scores, frame_score, total_score};
pub use snapshot::{snapshot, FrameView, GameSnapshot};
pub use state::{GameId, GameState, Phase, PlayerId, Roll};
pub use summary::{render_text, summarize, GameSummary};
pub use validation::{validate_roll, RollRejection};
