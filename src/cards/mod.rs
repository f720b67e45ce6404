//! Cards and the shared deck.

pub mod bird;
pub mod deck;

pub use bird::{Bird, Card, Season};
pub use deck::Deck;
