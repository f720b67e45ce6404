//! # birdgame
//!
//! Engine for a bird-collecting "Go Fish" card game for 2-4 players.
//!
//! Players take turns asking an opponent for a bird type they already hold.
//! A hit hands over every matching card; a miss means "go fish" - draw one
//! from the shared 40-card deck (10 birds x 4 seasons). Collecting all four
//! seasons of a bird scores a set; the game ends when the deck is empty and
//! any hand is empty, and the most sets wins.
//!
//! ## Design
//!
//! - **Pure engine**: no I/O. Prompting and rendering live in callers that
//!   consume the engine's queries (`players`, `history`, `deck_remaining`).
//! - **Deterministic**: the deck shuffle and the random bot draw from a
//!   seedable [`core::GameRng`], so a seed reproduces an entire game.
//! - **Misses are not errors**: a rejected ask or a draw from an empty deck
//!   is a normal `0` / `None` outcome. Only protocol misuse (bad player
//!   count, asking with a bird you don't hold) surfaces as
//!   [`game::GameError`].
//!
//! ## Example
//!
//! ```
//! use birdgame::{BirdGame, core::GameRng, game::bot};
//!
//! let mut game = BirdGame::new(&["Alice", "Bob"], 42).unwrap();
//! let mut rng = game.rng.fork();
//!
//! // Let the random bot play a bounded number of turns.
//! bot::simulate(&mut game, &mut rng, 200).unwrap();
//!
//! for player in game.players() {
//!     println!("{}: {} sets", player.name(), player.score());
//! }
//! ```

pub mod cards;
pub mod core;
pub mod game;

pub use crate::cards::{Bird, Card, Deck, Season};
pub use crate::core::{GameRng, GameRngState, PlayerId};
pub use crate::game::{BirdGame, GameError, Player, TurnAction, TurnRecord};
