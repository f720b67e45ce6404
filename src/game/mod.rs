//! The game: players, the turn engine, and the random opponent.

pub mod bot;
pub mod engine;
pub mod error;
pub mod player;

pub use engine::{initial_hand_size, BirdGame, TurnAction, TurnRecord, MAX_PLAYERS, MIN_PLAYERS};
pub use error::GameError;
pub use player::{CardBatch, Player};
