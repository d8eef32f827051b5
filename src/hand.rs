//! Player and dealer hand representations.

use core::cmp::Ordering;
use std::collections::BTreeSet;

use crate::card::Card;
use crate::error::HandError;

/// Highest total that does not bust.
pub const TWENTY_ONE: u16 = 21;

/// Every distinct sum reachable by picking one value per card.
fn evaluate_cards(cards: &[Card]) -> BTreeSet<u16> {
    cards.iter().fold(BTreeSet::from([0]), |totals, card| {
        totals
            .iter()
            .flat_map(|total| card.values().iter().map(move |value| total + value))
            .collect()
    })
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
}

/// An ordered, append-only collection of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Creates a hand holding the given cards, in order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        if self.is_bust() {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Marks the hand as stood. A bust hand stays bust.
    pub fn stand(&mut self) {
        if self.status == HandStatus::Active {
            self.status = HandStatus::Stand;
        }
    }

    /// Every distinct total the hand can count as.
    ///
    /// Each Ace contributes either 1 or 11, so two Aces give `{2, 12, 22}`.
    /// The empty hand totals `{0}`.
    #[must_use]
    pub fn possible_totals(&self) -> BTreeSet<u16> {
        evaluate_cards(&self.cards)
    }

    /// The possible totals that do not exceed 21.
    #[must_use]
    pub fn qualifying_totals(&self) -> BTreeSet<u16> {
        self.possible_totals()
            .into_iter()
            .filter(|&total| total <= TWENTY_ONE)
            .collect()
    }

    /// The highest qualifying total, or `None` when the hand is bust.
    #[must_use]
    pub fn best_total(&self) -> Option<u16> {
        self.qualifying_totals().last().copied()
    }

    /// The lowest possible total, counting every Ace as 1.
    #[must_use]
    pub fn min_total(&self) -> u16 {
        self.possible_totals().first().copied().unwrap_or(0)
    }

    /// Returns whether even the lowest interpretation exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.min_total() > TWENTY_ONE
    }

    /// Returns whether the hand is exactly two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.best_total() == Some(TWENTY_ONE)
    }

    /// Returns whether the hand has more than one qualifying total, i.e. an
    /// Ace is still counted as 11 in the best total.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.qualifying_totals().len() > 1
    }

    /// Compares the best totals of two hands.
    ///
    /// # Errors
    ///
    /// Returns an error if either hand is empty or bust, since neither has a
    /// total to compare.
    pub fn compare(&self, other: &Self) -> Result<Ordering, HandError> {
        Ok(self.comparable_total()?.cmp(&other.comparable_total()?))
    }

    fn comparable_total(&self) -> Result<u16, HandError> {
        if self.cards.is_empty() {
            return Err(HandError::Empty);
        }
        self.best_total().ok_or(HandError::Bust)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Active;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand.
    hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// The highest qualifying total, or `None` when bust.
    #[must_use]
    pub fn best_total(&self) -> Option<u16> {
        self.hand.best_total()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}
