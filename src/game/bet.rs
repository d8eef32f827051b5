use crate::error::{BetError, DealError};

use super::{Game, GameState};

impl Game {
    /// Places a bet for the specified player.
    ///
    /// A bet of 0 sits the player out for this round only.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the player cannot
    /// be found, or the bet exceeds the player's chips.
    pub fn bet(&mut self, player_index: usize, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let player = self
            .players
            .get_mut(player_index)
            .ok_or(BetError::PlayerNotFound)?;

        if amount > player.chips() {
            return Err(BetError::InsufficientFunds);
        }

        player.set_bet(amount);
        if amount == 0 {
            log::info!("{} sits out this round", player.name());
        } else {
            log::info!("{} bets {amount}", player.name());
        }

        Ok(())
    }

    /// Deals two cards to every betting player and the dealer.
    ///
    /// Cards go one at a time: each player in join order, then the dealer,
    /// and the pass is repeated.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bets have been
    /// placed, or there are not enough cards in the deck.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        let betting_players = self.active_players();
        if betting_players.is_empty() {
            return Err(DealError::NoBets);
        }

        let cards_needed = (betting_players.len() + 1) * 2;
        if self.cards_remaining() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        self.state = GameState::Dealing;

        for _ in 0..2 {
            for &index in &betting_players {
                let card = self.draw().ok_or(DealError::NotEnoughCards)?;
                log::debug!("dealt {card} to {}", self.players[index].name());
                self.players[index].hand_mut().add_card(card);
            }

            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            log::debug!("dealt {card} to dealer");
            self.dealer.add_card(card);
        }

        self.current_turn = betting_players[0];
        self.state = GameState::PlayerTurns;

        Ok(())
    }
}
