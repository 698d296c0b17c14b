//! A single-player casino blackjack rules core with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! betting with chips, the initial deal, player actions (hit, stand, double
//! down, surrender), the dealer's fixed house policy, and showdown.
//! Rendering is left to the caller, which reads a [`TableView`] snapshot.
//!
//! # Example
//!
//! ```
//! use bjsim::{Chip, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_chip(Chip::Five).unwrap();
//! game.deal().unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//!
//! game.stand().unwrap();
//! let result = game.finish_round().unwrap();
//! assert_eq!(result.bet, 500);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod chip;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use chip::Chip;
pub use dealer::{DEALER_HITS_TO, Dealer, DealerDecision};
pub use deck::{Deck, RESHUFFLE_THRESHOLD};
pub use error::{ActionError, BetError, DealError, DeckError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand, best_total, is_blackjack, is_soft};
pub use options::{DEFAULT_STARTING_BALANCE, GameOptions};
pub use player::Player;
pub use result::{RoundOutcome, RoundResult};
pub use view::{AvailableActions, TableView};
