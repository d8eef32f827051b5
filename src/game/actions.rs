use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::result::HandOutcome;
use crate::rules::payout;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, player_index: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurns {
            return Err(ActionError::InvalidState);
        }

        if self.current_turn != player_index {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn and settles the loss straight away,
    /// before the dealer plays.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not the
    /// player's turn, or the deck is empty.
    pub fn hit(&mut self, player_index: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(player_index)?;

        let card = self.draw().ok_or(ActionError::NoCards)?;

        let options = &self.options;
        let player = &mut self.players[player_index];
        player.hand_mut().add_card(card);
        log::debug!("{} hits and draws {card}", player.name());

        if player.hand().status() == HandStatus::Bust {
            let net = payout(HandOutcome::Lose, player.bet(), options);
            player.settle(HandOutcome::Lose, net);
            log::info!(
                "{} busts with {} and loses {}",
                player.name(),
                player.hand().min_total(),
                player.bet()
            );
            self.advance_to_next_player();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or it is not
    /// the player's turn.
    pub fn stand(&mut self, player_index: usize) -> Result<(), ActionError> {
        self.ensure_player_turn(player_index)?;

        let player = &mut self.players[player_index];
        player.hand_mut().stand();
        log::debug!("{} stands", player.name());

        self.advance_to_next_player();

        Ok(())
    }

    /// Advances to the next betting player, or to the dealer's turn once every
    /// player has finished.
    fn advance_to_next_player(&mut self) {
        let next = self
            .players
            .iter()
            .enumerate()
            .skip(self.current_turn + 1)
            .find(|(_, player)| player.is_active() && player.hand().status() == HandStatus::Active)
            .map(|(index, _)| index);

        match next {
            Some(index) => self.current_turn = index,
            None => {
                self.current_turn = self.players.len();
                self.state = GameState::DealerTurn;
            }
        }
    }
}
