//! Betting chip denominations.

/// A betting chip.
///
/// Amounts throughout the crate are expressed in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    /// $0.50 chip.
    Half,
    /// $1 chip.
    One,
    /// $5 chip.
    Five,
    /// $25 chip.
    TwentyFive,
    /// $100 chip.
    OneHundred,
    /// $500 chip.
    FiveHundred,
}

impl Chip {
    /// Every chip on the rail, smallest first.
    pub const ALL: [Self; 6] = [
        Self::Half,
        Self::One,
        Self::Five,
        Self::TwentyFive,
        Self::OneHundred,
        Self::FiveHundred,
    ];

    /// Returns the chip's value in cents.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Chip;
    ///
    /// assert_eq!(Chip::Half.cents(), 50);
    /// assert_eq!(Chip::FiveHundred.cents(), 50_000);
    /// ```
    #[must_use]
    pub const fn cents(self) -> usize {
        match self {
            Self::Half => 50,
            Self::One => 100,
            Self::Five => 500,
            Self::TwentyFive => 2_500,
            Self::OneHundred => 10_000,
            Self::FiveHundred => 50_000,
        }
    }
}
