use crate::chip::Chip;
use crate::error::{BetError, DealError, DeckError};

use super::{Game, GameState};

impl Game {
    /// Adds a chip to the player's bet, debiting the balance.
    ///
    /// Returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or the balance
    /// is below the chip's value.
    pub fn place_chip(&mut self, chip: Chip) -> Result<usize, BetError> {
        if self.state != GameState::Betting {
            tracing::warn!(?chip, state = ?self.state, "chip rejected outside betting");
            return Err(BetError::InvalidState);
        }

        self.player.place_chip(chip).inspect_err(|_| {
            tracing::warn!(
                ?chip,
                balance = self.player.balance(),
                "chip rejected, insufficient funds"
            );
        })
    }

    /// Takes the pending bet back into the balance before the deal.
    ///
    /// Returns the amount refunded.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state.
    pub fn clear_bet(&mut self) -> Result<usize, BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }
        Ok(self.player.clear_bet())
    }

    /// Starts a round: two cards each, alternating, player first.
    ///
    /// The deck is rebuilt first if it has run down to half. Hands from the
    /// previous round are cleared here.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bet has been
    /// placed, or the deck cannot cover the deal.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }
        if self.player.bet() == 0 {
            tracing::warn!("deal rejected, no bet placed");
            return Err(DealError::NoBet);
        }

        if self.deck.needs_reset() {
            self.deck.reset();
        }
        if self.deck.len() < 4 {
            return Err(DealError::Deck(DeckError::Empty));
        }

        self.player.clear_hand();
        self.dealer.clear_hand();
        self.last_result = None;

        for _ in 0..2 {
            self.player.receive(self.deck.deal()?);
            self.dealer.receive(self.deck.deal()?);
        }

        tracing::info!(
            bet = self.player.bet(),
            player = self.player.hand().value(),
            dealer_up = self.dealer.hand().visible_value(),
            "round dealt"
        );

        self.state = GameState::PlayerTurn;
        Ok(())
    }
}
