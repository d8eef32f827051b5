//! Round result types for settlement.

/// How a player's hand ended against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins even money (dealer busts or player has higher value).
    Win,
    /// Player wins with a blackjack against a dealer without one.
    Blackjack,
    /// Tie; the bet is neither won nor lost.
    Tie,
    /// Player loses the bet (player busts or dealer has higher value).
    Lose,
}

impl HandOutcome {
    /// Returns whether the outcome counts towards a player's wins.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Index of the player in join order.
    pub player_index: usize,
    /// The player's name.
    pub name: String,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this round.
    pub bet: usize,
    /// Net change in chips (positive = profit, negative = loss).
    pub net: i128,
    /// Chip balance after settlement.
    pub chips: usize,
    /// The player's best total, `None` if bust.
    pub player_total: Option<u16>,
    /// Whether the loss was settled during the player's turn.
    pub busted: bool,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player who bet, in join order.
    pub players: Vec<PlayerResult>,
    /// The dealer's best total, `None` if bust.
    pub dealer_total: Option<u16>,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
