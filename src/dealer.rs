//! The dealer and the fixed house policy.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::DealerHand;

/// Highest total the dealer still draws on.
pub const DEALER_HITS_TO: u8 = 16;

/// What the dealer does next under the house policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerDecision {
    /// Draw a card.
    Hit,
    /// Stand on the current total.
    Stand,
}

/// The dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    hand: DealerHand,
    turn_over: bool,
    busted: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: DealerHand::new(),
            turn_over: false,
            busted: false,
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &DealerHand {
        &self.hand
    }

    /// Returns whether the dealer's turn is over.
    #[must_use]
    pub const fn is_turn_over(&self) -> bool {
        self.turn_over
    }

    /// Returns whether the dealer busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns the house decision for the current hand.
    ///
    /// A natural stands, 16 or less draws, anything else stands.
    #[must_use]
    pub fn decision(&self) -> DealerDecision {
        if self.hand.is_blackjack() || self.hand.value() > DEALER_HITS_TO {
            DealerDecision::Stand
        } else {
            DealerDecision::Hit
        }
    }

    /// Plays the hand out under the house policy and returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck runs out while the dealer
    /// must draw.
    pub fn play(&mut self, deck: &mut Deck) -> Result<Vec<Card>, DeckError> {
        self.hand.reveal_hole();
        let mut drawn = Vec::new();

        while !self.turn_over {
            match self.decision() {
                DealerDecision::Hit => {
                    let card = deck.deal()?;
                    self.hand.add_card(card);
                    drawn.push(card);
                    tracing::debug!(?card, total = self.hand.value(), "dealer hits");

                    if self.hand.is_bust() {
                        tracing::debug!(total = self.hand.value(), "dealer busts");
                        self.busted = true;
                        self.turn_over = true;
                    }
                }
                DealerDecision::Stand => {
                    tracing::debug!(total = self.hand.value(), "dealer stands");
                    self.turn_over = true;
                }
            }
        }

        Ok(drawn)
    }

    /// Ends the dealer's turn without drawing.
    pub(crate) const fn skip_turn(&mut self) {
        self.hand.reveal_hole();
        self.turn_over = true;
    }

    /// Adds a card to the hand without any turn checks.
    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Reveals the hole card.
    pub(crate) const fn reveal_hole(&mut self) {
        self.hand.reveal_hole();
    }

    /// Clears the hand ahead of a new deal.
    pub(crate) fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Resets the turn flags. The hand is kept until the next deal.
    pub(crate) const fn new_round(&mut self) {
        self.turn_over = false;
        self.busted = false;
    }
}
