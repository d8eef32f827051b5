use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{PlayerResult, RoundResult};
use crate::rules::{adjudicate, payout};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws while their best total is
    /// below [`dealer_stands_on`](crate::GameOptions::dealer_stands_on). Any
    /// qualifying total at or above it stands, soft totals included. If the
    /// deck runs out the dealer stands on what they hold.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer.reveal_hole();
        let mut drawn_cards = Vec::new();

        while let Some(total) = self.dealer.best_total() {
            if total >= self.options.dealer_stands_on {
                log::info!("dealer stands on {total}");
                break;
            }

            let Some(card) = self.draw() else {
                log::warn!("dealer stands on {total} with an empty deck");
                break;
            };
            log::debug!("dealer draws {card}");
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        if self.dealer.is_bust() {
            log::info!("dealer busts");
        }

        self.state = GameState::Settlement;

        Ok(drawn_cards)
    }

    /// Settles every betting player against the dealer and updates chips.
    ///
    /// Players who busted during their turn were settled then and are
    /// reported with that loss; they are never settled twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let dealer = self.dealer.hand();
        let mut player_results = Vec::new();

        for (player_index, player) in self.players.iter_mut().enumerate() {
            if !player.is_active() {
                continue;
            }

            let (outcome, net, busted) = match player.outcome() {
                Some(outcome) => (outcome, payout(outcome, player.bet(), &self.options), true),
                None => {
                    let outcome = adjudicate(player.hand(), dealer)?;
                    let net = payout(outcome, player.bet(), &self.options);
                    player.settle(outcome, net);
                    log::info!("{} settles {outcome:?} ({net:+})", player.name());
                    (outcome, net, false)
                }
            };

            player_results.push(PlayerResult {
                player_index,
                name: player.name().to_owned(),
                outcome,
                bet: player.bet(),
                net,
                chips: player.chips(),
                player_total: player.hand().best_total(),
                busted,
            });
        }

        self.state = GameState::RoundOver;

        Ok(RoundResult {
            players: player_results,
            dealer_total: dealer.best_total(),
            dealer_bust: dealer.is_bust(),
            dealer_blackjack: dealer.is_blackjack(),
        })
    }
}
