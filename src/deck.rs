//! A single 52-card deck.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Remaining card count at or below which the deck is rebuilt before a round.
pub const RESHUFFLE_THRESHOLD: usize = DECK_SIZE / 2;

/// An ordered deck of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a populated, shuffled deck whose order is derived from `seed`.
    ///
    /// The same seed always yields the same sequence of shuffles.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a populated, shuffled deck seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.fill();
        deck.shuffle();
        deck
    }

    fn fill(&mut self) {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Fills the deck with one of each of the 52 cards, in rank order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEmpty`] if the deck still holds cards. Call
    /// [`Deck::clear`] first.
    pub fn populate(&mut self) -> Result<(), DeckError> {
        if !self.cards.is_empty() {
            return Err(DeckError::NotEmpty);
        }
        self.fill();
        Ok(())
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if there are no cards left.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Clears, repopulates and reshuffles the deck.
    pub fn reset(&mut self) {
        self.clear();
        self.fill();
        self.shuffle();
        tracing::info!("deck reset and reshuffled");
    }

    /// Returns whether the deck has run down far enough to be rebuilt.
    #[must_use]
    pub fn needs_reset(&self) -> bool {
        self.cards.len() <= RESHUFFLE_THRESHOLD
    }

    /// Replaces the contents of the deck. The last card given is dealt first.
    ///
    /// Intended for replays and scripted rounds; the usual 52-card invariant
    /// does not hold for a stacked deck.
    pub fn stack(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.clear();
        self.cards.extend(cards);
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
