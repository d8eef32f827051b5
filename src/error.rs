//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Face name is not Ace, 2..10, Jack, Queen or King.
    #[error("'{0}' is not a valid face value")]
    InvalidFace(String),
    /// Suit name is not Spades, Diamonds, Clubs or Hearts.
    #[error("'{0}' is not a valid suit value")]
    InvalidSuit(String),
}

/// Errors that can occur when comparing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand holds no cards.
    #[error("hand is empty")]
    Empty,
    /// The hand has no total of 21 or less.
    #[error("hand is bust")]
    Bust,
}

/// Errors that can occur when joining a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The table already seats the maximum number of players.
    #[error("table is full")]
    TableFull,
    /// Players can only join before the first round.
    #[error("invalid game state for joining")]
    InvalidState,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No players have placed bets.
    #[error("no players have placed bets")]
    NoBets,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer's turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// A hand could not be compared.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors that can occur when starting or ending rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round is still in progress.
    #[error("a round is still in progress")]
    InProgress,
    /// No players have joined.
    #[error("no players have joined")]
    NoPlayers,
    /// The game has already finished.
    #[error("the game has finished")]
    Finished,
}

/// Errors that can occur when constructing a guessing game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The range start lies after its end.
    #[error("range start {start} is greater than end {end}")]
    Inverted {
        /// Lower bound that was given.
        start: i64,
        /// Upper bound that was given.
        end: i64,
    },
}

/// Errors that can occur when making a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The guess lies outside the game's range.
    #[error("{guess} is not between {start} and {end}")]
    OutOfRange {
        /// Rejected guess.
        guess: i64,
        /// Range start.
        start: i64,
        /// Range end.
        end: i64,
    },
    /// The secret has already been found.
    #[error("the secret has already been guessed")]
    Finished,
}
