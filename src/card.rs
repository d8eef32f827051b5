//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All four suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
        }
    }
}

/// Card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Face {
    /// All thirteen faces, Ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// The point values this face may count as.
    #[must_use]
    pub const fn values(self) -> &'static [u16] {
        match self {
            Self::Ace => &[1, 11],
            Self::Two => &[2],
            Self::Three => &[3],
            Self::Four => &[4],
            Self::Five => &[5],
            Self::Six => &[6],
            Self::Seven => &[7],
            Self::Eight => &[8],
            Self::Nine => &[9],
            Self::Ten | Self::Jack | Self::Queen | Self::King => &[10],
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl FromStr for Face {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::InvalidFace(s.to_owned()))
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::InvalidSuit(s.to_owned()))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The face of the card.
    pub face: Face,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }

    /// Parses a card from a face name (`"Ace"`, `"7"`, `"Queen"`) and a suit
    /// name (`"Hearts"`).
    ///
    /// # Errors
    ///
    /// Returns an error if either name is not a member of its enumeration.
    pub fn parse(face: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(face.parse()?, suit.parse()?))
    }

    /// The point values this card may count as.
    #[must_use]
    pub const fn values(&self) -> &'static [u16] {
        self.face.values()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_faces_and_suits() {
        let card = Card::parse("Ace", "hearts").unwrap();
        assert_eq!(card, Card::new(Face::Ace, Suit::Hearts));
        assert_eq!(Card::parse("10", "Clubs").unwrap().face, Face::Ten);
    }

    #[test]
    fn rejects_unknown_face_or_suit() {
        assert_eq!(
            Card::parse("Joker", "Spades").unwrap_err(),
            CardError::InvalidFace("Joker".into())
        );
        assert_eq!(
            Card::parse("King", "Stars").unwrap_err(),
            CardError::InvalidSuit("Stars".into())
        );
    }

    #[test]
    fn face_values() {
        assert_eq!(Face::Ace.values(), &[1, 11]);
        assert_eq!(Face::Seven.values(), &[7]);
        assert_eq!(Face::Queen.values(), &[10]);
    }

    #[test]
    fn displays_face_of_suit() {
        assert_eq!(Card::new(Face::Ten, Suit::Spades).to_string(), "10 of Spades");
        assert_eq!(Card::new(Face::Ace, Suit::Hearts).to_string(), "Ace of Hearts");
    }
}
