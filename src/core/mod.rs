//! Core building blocks: player identity and deterministic randomness.

pub mod player;
pub mod rng;

pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
