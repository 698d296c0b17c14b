use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, action: &'static str) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            let err = ActionError::InvalidState;
            self.log_rejected(action, err);
            return Err(err);
        }
        Ok(())
    }

    fn log_rejected(&self, action: &'static str, err: ActionError) {
        tracing::warn!(
            action,
            %err,
            total = self.player.hand().value(),
            cards = self.player.hand().len(),
            "action rejected"
        );
    }

    /// Hands over to the dealer once the player's turn has ended.
    fn advance_after_action(&mut self) {
        if self.player.is_turn_over() {
            self.dealer.reveal_hole();
            self.state = GameState::DealerTurn;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the hand
    /// already totals 21 or more, or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn("hit")?;

        let card = self
            .player
            .hit(&mut self.deck)
            .inspect_err(|&err| self.log_rejected("hit", err))?;
        tracing::debug!(?card, total = self.player.hand().value(), "player hits");
        if self.player.is_busted() {
            tracing::info!(total = self.player.hand().value(), "player busts");
        }

        self.advance_after_action();
        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn("stand")?;

        self.player.stand()?;
        tracing::debug!(total = self.player.hand().value(), "player stands");

        self.advance_after_action();
        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// The turn ends after the one card whatever the total.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the hand is
    /// not the initial two cards, the balance cannot match the bet, or the
    /// deck is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn("double down")?;

        let card = self
            .player
            .double_down(&mut self.deck)
            .inspect_err(|&err| self.log_rejected("double down", err))?;
        tracing::debug!(
            ?card,
            bet = self.player.bet(),
            total = self.player.hand().value(),
            "player doubles down"
        );

        self.advance_after_action();
        Ok(card)
    }

    /// Player action: Surrender (forfeit half the bet).
    ///
    /// Returns the half-bet refund, which is credited immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the hand
    /// is not the initial two cards.
    pub fn surrender(&mut self) -> Result<usize, ActionError> {
        self.ensure_player_turn("surrender")?;

        let refund = self
            .player
            .surrender()
            .inspect_err(|&err| self.log_rejected("surrender", err))?;
        tracing::debug!(refund, "player surrenders");

        self.advance_after_action();
        Ok(refund)
    }

    /// Returns whether a hit would currently be accepted.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.state == GameState::PlayerTurn && self.player.hand().value() < 21
    }

    /// Returns whether a double down would currently be accepted.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.state == GameState::PlayerTurn
            && self.player.hand().len() == 2
            && self.player.balance() >= self.player.bet()
    }

    /// Returns whether a surrender would currently be accepted.
    #[must_use]
    pub fn can_surrender(&self) -> bool {
        self.state == GameState::PlayerTurn && self.player.hand().len() == 2
    }
}
