//! A player: a named hand of cards plus completed sets.
//!
//! The hand is an ordered multiset of cards (duplicates cannot actually
//! occur, since each card exists once in the deck). Completed sets are
//! recorded by bird; completing a set extracts its four cards from the hand
//! atomically, so a completed bird never lingers in the hand and never
//! completes twice.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Bird, Card, Season};

/// Cards pulled out of a hand in one operation: at most one per season.
pub type CardBatch = SmallVec<[Card; 4]>;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    sets: Vec<Bird>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            sets: Vec::new(),
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current hand, in acquisition order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Birds this player has completed, in completion order.
    #[must_use]
    pub fn sets(&self) -> &[Bird] {
        &self.sets
    }

    /// Current score: one point per completed set.
    #[must_use]
    pub fn score(&self) -> usize {
        self.sets.len()
    }

    /// Append a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove the first card structurally equal to `card`.
    ///
    /// Returns whether a card was removed.
    pub fn remove_card(&mut self, card: Card) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    /// Does the hand contain any card of `bird`?
    #[must_use]
    pub fn has_bird(&self, bird: Bird) -> bool {
        self.hand.iter().any(|c| c.bird == bird)
    }

    /// All cards of `bird`, in hand order. The hand is not modified.
    #[must_use]
    pub fn cards_of_bird(&self, bird: Bird) -> CardBatch {
        self.hand.iter().copied().filter(|c| c.bird == bird).collect()
    }

    /// Remove and return all cards of `bird`.
    ///
    /// The relative order of the remaining hand is preserved.
    pub fn take_bird(&mut self, bird: Bird) -> CardBatch {
        let mut taken = CardBatch::new();
        self.hand.retain(|&c| {
            if c.bird == bird {
                taken.push(c);
                false
            } else {
                true
            }
        });
        taken
    }

    /// Complete every set currently sitting in the hand.
    ///
    /// A bird with all four seasons in hand, and not already completed, is
    /// added to `sets` and its cards are extracted from the hand. All
    /// qualifying birds complete in this single pass; the returned list
    /// follows `Bird::ALL` order. Calling again without a hand change
    /// returns an empty list.
    pub fn check_for_sets(&mut self) -> Vec<Bird> {
        let mut counts: FxHashMap<Bird, usize> = FxHashMap::default();
        for card in &self.hand {
            *counts.entry(card.bird).or_insert(0) += 1;
        }

        let mut completed = Vec::new();
        for bird in Bird::ALL {
            if counts.get(&bird).copied() == Some(Season::ALL.len())
                && !self.sets.contains(&bird)
            {
                self.sets.push(bird);
                self.take_bird(bird);
                completed.push(bird);
            }
        }
        completed
    }

    /// Distinct birds currently in hand.
    ///
    /// Order is unspecified; sort before displaying.
    #[must_use]
    pub fn available_birds(&self) -> Vec<Bird> {
        let mut birds = Vec::new();
        for card in &self.hand {
            if !birds.contains(&card.bird) {
                birds.push(card.bird);
            }
        }
        birds
    }
}
