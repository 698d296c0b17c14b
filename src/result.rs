//! Round result types for showdown.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player has a natural and the dealer does not. Pays 3:2.
    PlayerBlackjack,
    /// Player beats the dealer or the dealer busts. Pays 1:1.
    PlayerWin,
    /// Player busts or the dealer has the higher total.
    PlayerLoss,
    /// Tie; the bet is returned.
    Push,
    /// Player surrendered and got half the bet back.
    Surrendered,
}

/// Result of a round after showdown.
///
/// Amounts are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The bet at showdown (doubled if the player doubled down).
    pub bet: usize,
    /// The amount credited to the player at showdown, stake included.
    pub payout: usize,
    /// Half-bet refund already credited when the player surrendered.
    pub refund: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
    /// Whether the player had blackjack.
    pub player_blackjack: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
