use alloc::vec::Vec;

use crate::card::Card;
use crate::dealer::Dealer;
use crate::error::ShowdownError;
use crate::player::Player;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

/// Decides the outcome and the amount credited at showdown.
///
/// The first matching rule wins: surrender, player bust, player natural
/// against a dealer without one, higher total or dealer bust, lower total,
/// then a tie. Two naturals push.
fn resolve(player: &Player, dealer: &Dealer) -> (RoundOutcome, usize) {
    let bet = player.bet();
    let hand = player.hand();
    let player_value = hand.value();
    let dealer_value = dealer.hand().value();

    if player.has_surrendered() {
        (RoundOutcome::Surrendered, 0)
    } else if player.is_busted() {
        (RoundOutcome::PlayerLoss, 0)
    } else if hand.is_blackjack() && !dealer.hand().is_blackjack() {
        // Stake back plus 3:2. Bets are whole multiples of 50 cents, so
        // halving first is exact.
        (RoundOutcome::PlayerBlackjack, (bet / 2).saturating_mul(5))
    } else if player_value > dealer_value || dealer.is_busted() {
        (RoundOutcome::PlayerWin, bet.saturating_mul(2))
    } else if player_value < dealer_value {
        (RoundOutcome::PlayerLoss, 0)
    } else {
        (RoundOutcome::Push, bet)
    }
}

impl Game {
    /// Dealer plays their hand according to the house policy.
    ///
    /// The dealer reveals the hole card and draws on 16 or less, standing on
    /// 17 or more or on a natural. If the player busted or surrendered the
    /// dealer does not draw.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let drawn = if self.player.is_busted() || self.player.has_surrendered() {
            self.dealer.skip_turn();
            Vec::new()
        } else {
            self.dealer.play(&mut self.deck)?
        };

        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Performs the showdown and settles the bet.
    ///
    /// The payout is credited to the player. If that leaves the balance at
    /// zero the game is over; otherwise the bet and turn flags are reset and
    /// the game returns to betting. Hands stay on the table until the next
    /// deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let (outcome, payout) = resolve(&self.player, &self.dealer);
        let bet = self.player.bet();
        let refund = if outcome == RoundOutcome::Surrendered {
            bet / 2
        } else {
            0
        };

        self.player.credit(payout);

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = (payout as isize + refund as isize) - bet as isize;

        let result = RoundResult {
            outcome,
            bet,
            payout,
            refund,
            net,
            player_value: self.player.hand().value(),
            dealer_value: self.dealer.hand().value(),
            player_blackjack: self.player.hand().is_blackjack(),
            dealer_blackjack: self.dealer.hand().is_blackjack(),
            dealer_bust: self.dealer.is_busted(),
        };

        tracing::info!(
            ?outcome,
            bet,
            payout,
            net,
            player = result.player_value,
            dealer = result.dealer_value,
            balance = self.player.balance(),
            "round settled"
        );

        self.player.new_round();
        self.dealer.new_round();
        self.last_result = Some(result);

        if self.player.balance() == 0 {
            tracing::info!("balance exhausted, game over");
            self.state = GameState::GameOver;
        } else {
            self.state = GameState::Betting;
        }

        Ok(result)
    }

    /// Runs the dealer's turn and the showdown in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// runs out while the dealer must draw.
    pub fn finish_round(&mut self) -> Result<RoundResult, ShowdownError> {
        self.dealer_play()?;
        self.showdown()
    }
}
