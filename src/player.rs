//! The player's seat: hand, bankroll and turn actions.

use crate::card::Card;
use crate::chip::Chip;
use crate::deck::Deck;
use crate::error::{ActionError, BetError};
use crate::hand::Hand;

/// The player.
///
/// All amounts are in cents. The balance only moves when chips are placed,
/// when a double down adds to the bet, and when refunds or payouts are
/// credited, and it never goes negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    hand: Hand,
    balance: usize,
    bet: usize,
    turn_over: bool,
    busted: bool,
    surrendered: bool,
}

impl Player {
    /// Creates a player with the given balance.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            hand: Hand::new(),
            balance,
            bet: 0,
            turn_over: false,
            busted: false,
            surrendered: false,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the player's turn is over.
    #[must_use]
    pub const fn is_turn_over(&self) -> bool {
        self.turn_over
    }

    /// Returns whether the player busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns whether the player surrendered this round.
    #[must_use]
    pub const fn has_surrendered(&self) -> bool {
        self.surrendered
    }

    /// Moves a chip from the balance onto the bet.
    ///
    /// Returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if the balance is below the
    /// chip's value.
    pub fn place_chip(&mut self, chip: Chip) -> Result<usize, BetError> {
        let amount = chip.cents();
        if self.balance < amount {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        self.bet += amount;
        Ok(self.bet)
    }

    /// Returns the pending bet to the balance. Returns the amount refunded.
    pub fn clear_bet(&mut self) -> usize {
        let refund = self.bet;
        self.balance = self.balance.saturating_add(refund);
        self.bet = 0;
        refund
    }

    /// Adds a card to the hand without any turn checks.
    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Draws a card.
    ///
    /// Busting ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is over, the hand already totals 21 or
    /// more, or the deck is empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, ActionError> {
        if self.turn_over {
            return Err(ActionError::InvalidState);
        }
        if self.hand.value() >= 21 {
            return Err(ActionError::CannotHit);
        }

        let card = deck.deal()?;
        self.hand.add_card(card);
        if self.hand.is_bust() {
            self.bust();
        }

        Ok(card)
    }

    /// Ends the turn without drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is already over.
    pub const fn stand(&mut self) -> Result<(), ActionError> {
        if self.turn_over {
            return Err(ActionError::InvalidState);
        }
        self.turn_over = true;
        Ok(())
    }

    /// Doubles the bet, draws exactly one card and ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is over, the hand is not the initial two
    /// cards, the balance cannot cover the extra bet, or the deck is empty.
    pub fn double_down(&mut self, deck: &mut Deck) -> Result<Card, ActionError> {
        if self.turn_over {
            return Err(ActionError::InvalidState);
        }
        if self.hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if self.balance < self.bet {
            return Err(ActionError::InsufficientFunds);
        }

        let card = deck.deal()?;
        self.balance -= self.bet;
        self.bet *= 2;
        self.hand.add_card(card);

        if self.hand.is_bust() {
            self.bust();
        } else {
            self.turn_over = true;
        }

        Ok(card)
    }

    /// Gives up the hand, taking back half the bet. Returns the refund.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is over or the hand is not the initial
    /// two cards.
    pub fn surrender(&mut self) -> Result<usize, ActionError> {
        if self.turn_over {
            return Err(ActionError::InvalidState);
        }
        if self.hand.len() != 2 {
            return Err(ActionError::CannotSurrender);
        }

        let refund = self.bet / 2;
        self.balance = self.balance.saturating_add(refund);
        self.surrendered = true;
        self.turn_over = true;
        Ok(refund)
    }

    const fn bust(&mut self) {
        self.busted = true;
        self.turn_over = true;
    }

    /// Credits a payout to the balance.
    pub(crate) const fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Clears the hand ahead of a new deal.
    pub(crate) fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Resets the turn flags and zeroes the bet. The hand is kept until the
    /// next deal.
    pub(crate) const fn new_round(&mut self) {
        self.bet = 0;
        self.turn_over = false;
        self.busted = false;
        self.surrendered = false;
    }
}
