//! Game configuration options.

/// Starting bankroll of $50.00, in cents.
pub const DEFAULT_STARTING_BALANCE: usize = 5_000;

/// Configuration options for a blackjack game.
///
/// The house rules are fixed; options only cover the table setup.
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default().with_starting_balance(10_000);
/// assert_eq!(options.starting_balance, 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The player's opening balance, in cents.
    pub starting_balance: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
        }
    }
}

impl GameOptions {
    /// Sets the player's opening balance, in cents.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }
}
