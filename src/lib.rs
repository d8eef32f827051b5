//! Console blackjack and number-guessing games.
//!
//! The crate provides a [`Game`] type that manages the full blackjack round
//! flow (betting, dealing, player turns, dealer play and settlement) and a
//! [`GuessingGame`] with optional higher/lower hints. Both are plain state
//! machines; the [`console`] module drives them over any line-oriented
//! reader and writer.
//!
//! # Example
//!
//! ```
//! use parlour::{Card, Face, Hand, Suit};
//!
//! let hand = Hand::from_cards(&[
//!     Card::new(Face::Ace, Suit::Hearts),
//!     Card::new(Face::Ace, Suit::Spades),
//! ]);
//! assert_eq!(hand.possible_totals().into_iter().collect::<Vec<_>>(), [2, 12, 22]);
//! assert_eq!(hand.best_total(), Some(12));
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod guess;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, CardError, DealError, GuessError, HandError, JoinError, RangeError,
    RoundError, ShowdownError,
};
pub use game::{Game, GameState};
pub use guess::{GuessOutcome, GuessingGame};
pub use hand::{DealerHand, Hand, HandStatus};
pub use options::{GameOptions, RoundingMode};
pub use player::Player;
pub use result::{HandOutcome, PlayerResult, RoundResult};
