//! A single 52-card deck.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Face, Suit};

/// A deck of cards drawn from the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates all 52 cards in a fixed order without shuffling.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for face in Face::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(face, suit));
            }
        }
        Self { cards }
    }

    /// Creates a full deck and shuffles it uniformly.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a stacked deck. The last card in `cards` is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the next card, or `None` once the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn shuffled_deck_has_52_distinct_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);

        let mut seen = HashSet::new();
        while let Some(card) = deck.draw() {
            assert!(seen.insert(card), "{card} drawn twice");
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn draw_53_yields_empty_signal() {
        let mut deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));
        for _ in 0..DECK_SIZE {
            assert!(deck.draw().is_some());
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn shuffle_changes_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_ne!(Deck::shuffled(&mut rng), Deck::ordered());
    }

    #[test]
    fn stacked_deck_draws_from_the_back() {
        let first = Card::new(Face::Two, Suit::Clubs);
        let second = Card::new(Face::King, Suit::Hearts);
        let mut deck = Deck::from_cards(vec![second, first]);
        assert_eq!(deck.draw(), Some(first));
        assert_eq!(deck.draw(), Some(second));
        assert_eq!(deck.draw(), None);
    }
}
