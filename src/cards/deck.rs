//! The shared draw deck.
//!
//! A standard deck is the full cartesian product of birds and seasons, 40
//! cards with no duplicates. The deck is treated as a stack: draws come off
//! the back, and the only other mutation is an in-place shuffle. Deck size
//! never grows during a game.

use serde::{Deserialize, Serialize};

use super::bird::{Bird, Card, Season};
use crate::core::GameRng;

/// Ordered stack of cards. Top of the deck is the end of the sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full 40-card deck, unshuffled.
    ///
    /// Every (bird, season) combination appears exactly once, in canonical
    /// `Bird::ALL` x `Season::ALL` order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(Bird::ALL.len() * Season::ALL.len());
        for bird in Bird::ALL {
            for season in Season::ALL {
                cards.push(Card::new(bird, season));
            }
        }
        Self { cards }
    }

    /// Build a deck in a known order. The end of the slice is the top.
    #[cfg(test)]
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle the remaining cards in place. Size is unchanged.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the top card.
    ///
    /// Returns `None` once the deck is exhausted; an empty deck is a normal
    /// end-of-game condition, not an error.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Is the deck out of cards?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
