//! The card universe: bird types, seasonal suits, and the card value type.
//!
//! The universe is closed: 10 birds x 4 seasons = 40 distinct cards, each of
//! which appears exactly once in a standard deck. Collecting all four seasons
//! of a bird completes a set.

use serde::{Deserialize, Serialize};

/// The ten bird types. A complete set is all four seasons of one bird.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bird {
    Robin,
    Eagle,
    Sparrow,
    Owl,
    Hawk,
    Cardinal,
    Bluejay,
    Crow,
    Parrot,
    Finch,
}

impl Bird {
    /// Every bird type, in canonical order.
    pub const ALL: [Bird; 10] = [
        Bird::Robin,
        Bird::Eagle,
        Bird::Sparrow,
        Bird::Owl,
        Bird::Hawk,
        Bird::Cardinal,
        Bird::Bluejay,
        Bird::Crow,
        Bird::Parrot,
        Bird::Finch,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Bird::Robin => "Robin",
            Bird::Eagle => "Eagle",
            Bird::Sparrow => "Sparrow",
            Bird::Owl => "Owl",
            Bird::Hawk => "Hawk",
            Bird::Cardinal => "Cardinal",
            Bird::Bluejay => "Bluejay",
            Bird::Crow => "Crow",
            Bird::Parrot => "Parrot",
            Bird::Finch => "Finch",
        }
    }
}

impl std::fmt::Display for Bird {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four seasonal suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Every season, in canonical order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card: one bird in one season.
///
/// Freely copyable value type with structural equality. `Ord` is derived
/// (bird first, then season) so consumers can sort hands for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Bird type (the set a card counts toward).
    pub bird: Bird,
    /// Seasonal suit.
    pub season: Season,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(bird: Bird, season: Season) -> Self {
        Self { bird, season }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.bird, self.season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_sizes() {
        assert_eq!(Bird::ALL.len(), 10);
        assert_eq!(Season::ALL.len(), 4);
    }

    #[test]
    fn test_card_structural_equality() {
        let a = Card::new(Bird::Robin, Season::Spring);
        let b = Card::new(Bird::Robin, Season::Spring);
        let c = Card::new(Bird::Robin, Season::Winter);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, Card::new(Bird::Eagle, Season::Spring));
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Bird::Owl, Season::Fall);
        assert_eq!(format!("{}", card), "Owl (Fall)");
    }

    #[test]
    fn test_card_ordering_sorts_by_bird_then_season() {
        let mut cards = vec![
            Card::new(Bird::Eagle, Season::Winter),
            Card::new(Bird::Robin, Season::Summer),
            Card::new(Bird::Robin, Season::Spring),
        ];
        cards.sort();

        assert_eq!(cards[0], Card::new(Bird::Robin, Season::Spring));
        assert_eq!(cards[1], Card::new(Bird::Robin, Season::Summer));
        assert_eq!(cards[2], Card::new(Bird::Eagle, Season::Winter));
    }

    #[test]
    fn test_card_serde_roundtrip() {
        let card = Card::new(Bird::Parrot, Season::Summer);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
