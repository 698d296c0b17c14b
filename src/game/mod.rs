//! Game engine and state management.

use crate::chip::Chip;
use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;
use crate::view::{AvailableActions, TableView};

mod actions;
mod bet;
mod showdown;
pub mod state;

pub use state::GameState;

/// A single-player blackjack table that drives the round flow.
///
/// The game owns the deck, the player and the dealer. Each call advances the
/// round by one step:
///
/// 1. [`Game::place_chip`] while [`GameState::Betting`]
/// 2. [`Game::deal`]
/// 3. [`Game::hit`], [`Game::stand`], [`Game::double_down`] or
///    [`Game::surrender`] while [`GameState::PlayerTurn`]
/// 4. [`Game::dealer_play`] in [`GameState::DealerTurn`]
/// 5. [`Game::showdown`] in [`GameState::RoundOver`], which pays out and
///    returns to betting (or ends the game when the balance is zero)
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cards in the deck.
    deck: Deck,
    player: Player,
    dealer: Dealer,
    /// Current game state.
    state: GameState,
    /// Result of the most recently settled round.
    last_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.balance(), 5_000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new game whose deck is seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: GameOptions) -> Self {
        Self::with_deck(options, Deck::from_entropy())
    }

    fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let state = if options.starting_balance == 0 {
            GameState::GameOver
        } else {
            GameState::Betting
        };

        Self {
            options,
            deck,
            player: Player::new(options.starting_balance),
            dealer: Dealer::new(),
            state,
            last_result: None,
        }
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck mutably, for replays and scripted rounds.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's balance, in cents.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.player.balance()
    }

    /// Returns the player's current bet, in cents.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.player.bet()
    }

    /// Returns the result of the last settled round.
    ///
    /// Cleared when the next round is dealt.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns whether a chip can be placed: the table is taking bets and the
    /// balance covers at least the smallest chip.
    ///
    /// A balance left below the smallest chip (for example after surrendering
    /// an all-in $0.50 bet) is not game over, but no further bet is possible.
    #[must_use]
    pub fn can_bet(&self) -> bool {
        self.state == GameState::Betting && self.player.balance() >= Chip::Half.cents()
    }

    /// Returns which inputs are currently accepted.
    #[must_use]
    pub fn available_actions(&self) -> AvailableActions {
        AvailableActions {
            bet: self.can_bet(),
            deal: self.state == GameState::Betting && self.player.bet() > 0,
            hit: self.can_hit(),
            stand: self.state == GameState::PlayerTurn,
            double_down: self.can_double_down(),
            surrender: self.can_surrender(),
        }
    }

    /// Returns a read-only snapshot of the table for presentation.
    ///
    /// The dealer's hole card is withheld until the player's turn is over.
    #[must_use]
    pub fn view(&self) -> TableView {
        let dealer = self.dealer.hand();
        TableView {
            state: self.state,
            player_cards: self.player.hand().cards().to_vec(),
            player_value: self.player.hand().value(),
            dealer_cards: dealer.visible_cards(),
            dealer_value: dealer.visible_value(),
            balance: self.player.balance(),
            bet: self.player.bet(),
            actions: self.available_actions(),
            last_result: self.last_result,
            game_over: self.is_game_over(),
            cards_remaining: self.deck.len(),
        }
    }
}
