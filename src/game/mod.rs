//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{JoinError, RoundError};
use crate::hand::DealerHand;
use crate::options::{GameOptions, MAX_SEATS};
use crate::player::Player;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A blackjack game engine that manages players, betting, and round flow.
///
/// The game owns the deck, player state, and dealer state. Use [`GameOptions`]
/// to configure rules such as the table size and blackjack payout.
///
/// A round runs through [`start_round`](Self::start_round),
/// [`bet`](Self::bet), [`deal`](Self::deal), [`hit`](Self::hit) /
/// [`stand`](Self::stand), [`dealer_play`](Self::dealer_play) and
/// [`settle`](Self::settle).
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards left for the current round.
    deck: Deck,
    /// Current game state.
    state: GameState,
    /// Seated players in join order.
    players: Vec<Player>,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Index of the player whose turn it is.
    current_turn: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use parlour::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let ada = game.join("Ada", 100).unwrap();
    /// game.start_round().unwrap();
    /// game.bet(ada, 10).unwrap();
    /// game.deal().unwrap();
    /// assert_eq!(game.player(ada).unwrap().hand().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            options,
            deck,
            state: GameState::WaitingForPlayers,
            players: Vec::new(),
            dealer: DealerHand::new(),
            current_turn: 0,
            rng,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        let card = self.deck.draw();
        if card.is_none() {
            log::warn!("deck exhausted");
        }
        card
    }

    /// Seats a player with a starting chip balance.
    ///
    /// Returns the player's index, which is also their turn order.
    ///
    /// # Errors
    ///
    /// Returns an error once the first round has started or the table is full.
    /// The table never seats more than [`MAX_SEATS`], so a full table can always be dealt.
    pub fn join(&mut self, name: impl Into<String>, chips: usize) -> Result<usize, JoinError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }
        if self.players.len() >= self.options.max_players.min(MAX_SEATS) {
            return Err(JoinError::TableFull);
        }

        let player = Player::new(name, chips);
        log::info!("{} joins with {chips} chips", player.name());
        self.players.push(player);
        Ok(self.players.len() - 1)
    }

    /// Starts a new round with a freshly shuffled deck and cleared hands.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, nobody has joined, or the
    /// game has finished.
    pub fn start_round(&mut self) -> Result<(), RoundError> {
        match self.state {
            GameState::WaitingForPlayers | GameState::RoundOver => {}
            GameState::Finished => return Err(RoundError::Finished),
            _ => return Err(RoundError::InProgress),
        }
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        for player in &mut self.players {
            player.reset_round();
        }
        self.dealer.clear();
        self.deck = Deck::shuffled(&mut self.rng);
        self.current_turn = 0;
        self.state = GameState::Betting;
        log::info!("round started with {} players", self.players.len());
        Ok(())
    }

    /// Ends the game. No further rounds can be started.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have been dealt and the round is not settled.
    pub fn finish(&mut self) -> Result<(), RoundError> {
        match self.state {
            GameState::WaitingForPlayers
            | GameState::Betting
            | GameState::RoundOver
            | GameState::Finished => {
                self.state = GameState::Finished;
                log::info!("game finished");
                Ok(())
            }
            _ => Err(RoundError::InProgress),
        }
    }

    /// Replaces the deck used for the rest of the round.
    ///
    /// Useful for replaying a known deal; the last card of the deck is dealt
    /// first.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns all seated players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the index of the player whose turn it is.
    ///
    /// Returns `None` outside of player turns.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        match self.state {
            GameState::PlayerTurns => Some(self.current_turn),
            _ => None,
        }
    }

    /// Indices of players with a bet this round, in join order.
    fn active_players(&self) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.is_active())
            .map(|(index, _)| index)
            .collect()
    }
}
