//! Game configuration options.

use crate::card::DECK_SIZE;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest.
    Nearest,
}

impl RoundingMode {
    /// Divides `numerator` by `denominator`, rounding to whole chips.
    ///
    /// A zero denominator is treated as one. `Nearest` rounds halves up.
    ///
    /// ```
    /// use parlour::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::Down.apply(15, 2), 7);
    /// assert_eq!(RoundingMode::Up.apply(15, 2), 8);
    /// assert_eq!(RoundingMode::Nearest.apply(14, 4), 4);
    /// ```
    #[must_use]
    pub const fn apply(self, numerator: u128, denominator: u128) -> u128 {
        let denominator = if denominator == 0 { 1 } else { denominator };
        let quotient = numerator / denominator;
        let remainder = numerator % denominator;
        match self {
            Self::Down => quotient,
            Self::Up if remainder > 0 => quotient + 1,
            Self::Up => quotient,
            Self::Nearest if remainder >= denominator - remainder => quotient + 1,
            Self::Nearest => quotient,
        }
    }
}

/// Largest number of players a single 52-card deck can deal to.
///
/// Every seat and the dealer take two cards each.
pub const MAX_SEATS: usize = DECK_SIZE / 2 - 1;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use parlour::GameOptions;
///
/// let options = GameOptions::default()
///     .with_max_players(4)
///     .with_blackjack_pays(6, 5)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Maximum number of players seated at the table, at most [`MAX_SEATS`].
    pub max_players: usize,
    /// Total at or above which the dealer stands.
    pub dealer_stands_on: u16,
    /// Blackjack payout as `(numerator, denominator)` of the bet (typically 3:2).
    pub blackjack_pays: (u32, u32),
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_players: 7,
            dealer_stands_on: 17,
            blackjack_pays: (3, 2),
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets the maximum number of players, clamped to `1..=MAX_SEATS`.
    ///
    /// # Example
    ///
    /// ```
    /// use parlour::{GameOptions, options::MAX_SEATS};
    ///
    /// let options = GameOptions::default().with_max_players(3);
    /// assert_eq!(options.max_players, 3);
    /// assert_eq!(GameOptions::default().with_max_players(100).max_players, MAX_SEATS);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = if max_players == 0 {
            1
        } else if max_players > MAX_SEATS {
            MAX_SEATS
        } else {
            max_players
        };
        self
    }

    /// Sets the total at which the dealer stops drawing.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u16) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the blackjack payout ratio, e.g. `(6, 5)` for 6:5.
    ///
    /// # Example
    ///
    /// ```
    /// use parlour::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(6, 5);
    /// assert_eq!(options.blackjack_pays, (6, 5));
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, numerator: u32, denominator: u32) -> Self {
        self.blackjack_pays = (numerator, denominator);
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
