//! Seated players and their running record.

use crate::hand::Hand;
use crate::result::HandOutcome;

/// A player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    chips: usize,
    bet: usize,
    wins: u32,
    ties: u32,
    losses: u32,
    hand: Hand,
    /// Outcome already settled this round.
    outcome: Option<HandOutcome>,
}

impl Player {
    /// Creates a player with a starting chip balance.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: usize) -> Self {
        Self {
            name: name.into(),
            chips,
            bet: 0,
            wins: 0,
            ties: 0,
            losses: 0,
            hand: Hand::new(),
            outcome: None,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the bet for the current round, 0 when sitting out.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the player has a stake in the current round.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.bet > 0
    }

    /// Rounds won, blackjacks included.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Rounds tied.
    #[must_use]
    pub const fn ties(&self) -> u32 {
        self.ties
    }

    /// Rounds lost.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the outcome settled this round, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) const fn set_bet(&mut self, bet: usize) {
        self.bet = bet;
    }

    /// Clears the hand, bet and settled outcome for a new round.
    pub(crate) fn reset_round(&mut self) {
        self.hand.clear();
        self.bet = 0;
        self.outcome = None;
    }

    /// Applies a settled outcome once. Returns `false` if the round was
    /// already settled for this player.
    ///
    /// The balance saturates at `usize::MAX` rather than wrapping.
    pub(crate) fn settle(&mut self, outcome: HandOutcome, net: i128) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        let delta = usize::try_from(net.unsigned_abs()).unwrap_or(usize::MAX);
        self.chips = if net < 0 {
            self.chips.saturating_sub(delta)
        } else {
            self.chips.saturating_add(delta)
        };
        if outcome.is_win() {
            self.wins += 1;
        } else if outcome == HandOutcome::Tie {
            self.ties += 1;
        } else {
            self.losses += 1;
        }
        self.outcome = Some(outcome);
        true
    }
}
