//! Game errors.
//!
//! Only protocol misuse is an error. In-game outcomes that simply go against
//! the player (a missed ask, drawing from an empty deck) are signaled with
//! `0` / `None` results instead.

use crate::core::PlayerId;

/// Errors from game construction and the turn protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game supports 2-4 players.
    #[error("player count must be 2-4, got {0}")]
    PlayerCount(usize),

    /// Every player needs a non-empty name.
    #[error("player {0} has an empty name")]
    EmptyName(usize),

    /// The target seat does not exist or is the asker's own seat.
    #[error("invalid ask target {0}")]
    InvalidTarget(PlayerId),

    /// A player may only ask for a bird they already hold.
    #[error("current player holds no {0} card")]
    BirdNotHeld(crate::cards::Bird),

    /// The game has ended; no further turns can be played.
    #[error("the game is over")]
    GameOver,
}
