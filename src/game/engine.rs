//! The turn engine.
//!
//! `BirdGame` owns the table: the players in seat order, the shared deck,
//! whose turn it is, and the latched game-over flag. The core protocol is
//! ask/draw:
//!
//! 1. The current player asks an opponent for a bird they themselves hold.
//! 2. A hit transfers every matching card from the target, atomically.
//! 3. A miss ("go fish") is compensated with one draw from the deck.
//! 4. Both participants are checked for newly completed sets.
//! 5. The turn passes round-robin, hit or miss.
//!
//! `ask_for_cards` / `draw_card` / `advance_turn` expose the protocol steps
//! individually; `play_turn` drives a whole turn and records it in the
//! history. The game ends once the deck is empty and any hand is empty, and
//! the `over` flag never clears after that.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::Player;
use crate::cards::{Bird, Card, Deck};
use crate::core::{GameRng, PlayerId};

/// Minimum seats at the table.
pub const MIN_PLAYERS: usize = 2;
/// Maximum seats at the table.
pub const MAX_PLAYERS: usize = 4;

/// Cards dealt to each player: 7 heads-up, 5 with more seats.
#[must_use]
pub const fn initial_hand_size(player_count: usize) -> usize {
    if player_count == 2 {
        7
    } else {
        5
    }
}

/// What the current player did with their turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// Asked `target` for `bird`.
    Ask {
        /// Who was asked.
        target: PlayerId,
        /// Which bird was requested.
        bird: Bird,
        /// Cards handed over (0 on a miss, 1-3 on a hit).
        transferred: usize,
        /// The go-fish draw on a miss, if the deck still had a card.
        /// Whether this stays hidden from opponents is a presentation
        /// concern; the engine records it for replay.
        drew: Option<Card>,
        /// Sets the asker completed this turn.
        asker_sets: Vec<Bird>,
        /// Sets the target completed this turn.
        target_sets: Vec<Bird>,
    },
    /// Took no action (empty hand).
    Skip,
}

/// One completed turn, as appended to the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// Whose turn it was.
    pub player: PlayerId,
    /// What they did.
    pub action: TurnAction,
}

/// A game of bird-collecting Go Fish for 2-4 players.
#[derive(Clone, Debug)]
pub struct BirdGame {
    players: Vec<Player>,
    deck: Deck,
    current: usize,
    over: bool,
    turn_number: u32,
    history: Vector<TurnRecord>,
    /// Deterministic RNG; seeded at construction, used for the shuffle.
    pub rng: GameRng,
}

impl BirdGame {
    /// Set up a game: validate names, shuffle, deal, resolve any dealt sets.
    ///
    /// Deals round-robin, one card to each player per round, 7 cards each
    /// for exactly 2 players and 5 each otherwise. Sets formed by the deal
    /// itself are completed immediately, as a table would before play.
    pub fn new<S: AsRef<str>>(player_names: &[S], seed: u64) -> Result<Self, GameError> {
        let count = player_names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::PlayerCount(count));
        }
        for (i, name) in player_names.iter().enumerate() {
            if name.as_ref().is_empty() {
                return Err(GameError::EmptyName(i));
            }
        }

        let mut rng = GameRng::new(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        let mut players: Vec<Player> = player_names
            .iter()
            .map(|name| Player::new(name.as_ref()))
            .collect();

        for _ in 0..initial_hand_size(count) {
            for player in &mut players {
                if let Some(card) = deck.draw() {
                    player.add_card(card);
                }
            }
        }

        for player in &mut players {
            let dealt_sets = player.check_for_sets();
            if !dealt_sets.is_empty() {
                log::debug!("{} completed sets off the deal: {:?}", player.name(), dealt_sets);
            }
        }

        Ok(Self {
            players,
            deck,
            current: 0,
            over: false,
            turn_number: 1,
            history: Vector::new(),
            rng,
        })
    }

    // === Queries ===

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player by seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Cards left in the shared deck.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Has the game-over flag latched?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Turn number of the next turn to be played, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Completed turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    // === Protocol steps ===

    /// Ask `target` for every card of `bird`. Returns the transfer count.
    ///
    /// Rejected requests are a normal zero result, not an error: asking
    /// without holding the bird yourself, asking your own seat, or naming a
    /// seat that does not exist all return 0 and change nothing. A miss
    /// (target holds none) also returns 0; the turn loop, not this method,
    /// compensates with a draw.
    pub fn ask_for_cards(&mut self, asker: PlayerId, target: PlayerId, bird: Bird) -> usize {
        let (a, t) = (asker.index(), target.index());
        if a == t || a >= self.players.len() || t >= self.players.len() {
            return 0;
        }
        if !self.players[a].has_bird(bird) {
            return 0;
        }

        let (asker_ref, target_ref) = self.pair_mut(a, t);
        let cards = target_ref.take_bird(bird);
        let count = cards.len();
        for card in cards {
            asker_ref.add_card(card);
        }
        count
    }

    /// Draw one card from the shared deck into `player`'s hand.
    ///
    /// `None` when the deck is empty. Turn order is the caller's concern.
    pub fn draw_card(&mut self, player: PlayerId) -> Option<Card> {
        let card = self.deck.draw()?;
        self.players[player.index()].add_card(card);
        Some(card)
    }

    /// Pass the turn to the next seat, hit or miss. No go-again rule.
    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Evaluate the termination predicate, latching the `over` flag.
    ///
    /// The game ends once the deck is empty and at least one hand is empty.
    /// Once latched the game stays over regardless of later state.
    pub fn is_game_over(&mut self) -> bool {
        if self.over {
            return true;
        }
        if self.deck.is_empty() && self.players.iter().any(|p| p.hand_size() == 0) {
            log::debug!("game over after {} turns", self.turn_number.saturating_sub(1));
            self.over = true;
        }
        self.over
    }

    /// The player with the strictly highest score.
    ///
    /// `None` before the game is over, and `None` on a tie for the top
    /// score.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if !self.over {
            return None;
        }
        let top = self.players.iter().map(Player::score).max()?;
        let mut leaders = self.players.iter().filter(|p| p.score() == top);
        match (leaders.next(), leaders.next()) {
            (Some(winner), None) => Some(winner),
            _ => None,
        }
    }

    // === Turn orchestration ===

    /// Play one full turn for the current player: ask, go fish on a miss,
    /// resolve sets for both participants, advance the turn.
    ///
    /// Asking for a bird the current player does not hold, or naming an
    /// invalid target, fails without consuming the turn so the caller can
    /// re-prompt.
    pub fn play_turn(&mut self, target: PlayerId, bird: Bird) -> Result<TurnRecord, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let asker = self.current_player_id();
        if target == asker || target.index() >= self.players.len() {
            return Err(GameError::InvalidTarget(target));
        }
        if !self.current_player().has_bird(bird) {
            return Err(GameError::BirdNotHeld(bird));
        }

        let transferred = self.ask_for_cards(asker, target, bird);
        let drew = if transferred == 0 {
            log::debug!("{} go fish on {}", self.players[asker.index()].name(), bird);
            self.draw_card(asker)
        } else {
            log::debug!(
                "{} took {} {} card(s) from {}",
                self.players[asker.index()].name(),
                transferred,
                bird,
                self.players[target.index()].name()
            );
            None
        };

        // Check both participants after every ask, asker first.
        let asker_sets = self.players[asker.index()].check_for_sets();
        let target_sets = self.players[target.index()].check_for_sets();

        let record = TurnRecord {
            turn: self.turn_number,
            player: asker,
            action: TurnAction::Ask {
                target,
                bird,
                transferred,
                drew,
                asker_sets,
                target_sets,
            },
        };
        self.finish_turn(record.clone());
        Ok(record)
    }

    /// Spend the current player's turn slot with no action.
    ///
    /// The engine never skips automatically; the caller invokes this for a
    /// player with an empty hand.
    pub fn skip_turn(&mut self) -> Result<TurnRecord, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let record = TurnRecord {
            turn: self.turn_number,
            player: self.current_player_id(),
            action: TurnAction::Skip,
        };
        self.finish_turn(record.clone());
        Ok(record)
    }

    fn finish_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
        self.turn_number += 1;
        self.advance_turn();
        self.is_game_over();
    }

    /// Two distinct players borrowed mutably at once.
    fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Player, &mut Player) {
        debug_assert_ne!(a, b);
        if a < b {
            let (left, right) = self.players.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.players.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}
