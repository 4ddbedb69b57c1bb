//! In-memory repositories. Each game sits behind its own lock so games never
//! contend with each other.

pub mod games;
pub mod players;

pub use games::GameStore;
pub use players::{Player, PlayerStore};
