//! Read-only table snapshot for the presentation layer.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;
use crate::result::RoundResult;

/// Which inputs the table currently accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvailableActions {
    /// A chip can be placed: betting is open and the balance covers the
    /// smallest chip.
    pub bet: bool,
    /// A bet is on the table and the round can be dealt.
    pub deal: bool,
    /// Hit.
    pub hit: bool,
    /// Stand.
    pub stand: bool,
    /// Double down.
    pub double_down: bool,
    /// Surrender.
    pub surrender: bool,
}

/// Everything a renderer needs to draw one frame.
///
/// Amounts are in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current game state.
    pub state: GameState,
    /// The player's cards in deal order.
    pub player_cards: Vec<Card>,
    /// The player's best total.
    pub player_value: u8,
    /// The dealer's cards; the hole card is `None` while face down.
    pub dealer_cards: Vec<Option<Card>>,
    /// The dealer's total counting only face-up cards.
    pub dealer_value: u8,
    /// The player's balance.
    pub balance: usize,
    /// The player's bet.
    pub bet: usize,
    /// Inputs currently accepted.
    pub actions: AvailableActions,
    /// Result of the last settled round, for the end-of-round banner.
    pub last_result: Option<RoundResult>,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}
