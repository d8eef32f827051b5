use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use crate::card::Card;
use crate::error::{ActionError, DealError};
use crate::game::Game;
use crate::hand::{DealerHand, Hand};
use crate::options::MAX_SEATS;
use crate::result::{HandOutcome, RoundResult};

use super::{Console, ConsoleError, Move};

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_totals(totals: &BTreeSet<u16>) -> String {
    totals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The dealer's cards as players may see them.
fn describe_dealer(dealer: &DealerHand) -> String {
    if dealer.is_hole_revealed() {
        return join_cards(dealer.cards());
    }
    match (dealer.up_card(), dealer.cards().len()) {
        (Some(card), 1) => card.to_string(),
        (Some(card), _) => format!("{card} and a face-down card"),
        (None, _) => String::new(),
    }
}

/// Best total, marked soft when an Ace still counts as 11.
fn describe_total(hand: &Hand) -> Option<String> {
    let total = hand.best_total()?;
    Some(if hand.is_soft() {
        format!("soft {total}")
    } else {
        total.to_string()
    })
}

fn to_prompt_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Seats players at the table, asking for whatever was not supplied.
///
/// `players` outside `1..=max_players` is ignored and asked for instead.
///
/// # Errors
///
/// Returns an error if the console is closed or a seat cannot be taken.
pub fn seat_players<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
    players: Option<usize>,
    chips: Option<usize>,
) -> Result<(), ConsoleError> {
    let max_players = game.options.max_players.min(MAX_SEATS);
    let count = match players.filter(|n| (1..=max_players).contains(n)) {
        Some(count) => count,
        None => console.prompt_int_in(
            &format!("Please enter number of players. Must be between 1 and {max_players}:"),
            1..=to_prompt_bound(max_players),
        )? as usize,
    };

    let chips = match chips {
        Some(chips) => chips,
        None => console.prompt_int_in("Please enter starting chips:", 0..=i64::MAX)? as usize,
    };

    for seat in 1..=count {
        let name = console.prompt_line(&format!("Player {seat}, what is your name?"))?;
        let name = if name.is_empty() {
            format!("Player {seat}")
        } else {
            name
        };
        game.join(name, chips)?;
    }

    Ok(())
}

/// Plays rounds until every player sits out or the table declines another
/// round, then prints each player's final balance.
///
/// End of input is treated as leaving the table.
///
/// # Errors
///
/// Returns an error if the console cannot be written or the engine refuses a
/// step.
pub fn play_blackjack<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
) -> Result<(), ConsoleError> {
    match play_rounds(console, game) {
        Ok(()) | Err(ConsoleError::Closed) => farewell(console, game),
        Err(err) => Err(err),
    }
}

fn play_rounds<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
) -> Result<(), ConsoleError> {
    loop {
        game.start_round()?;
        take_bets(console, game)?;

        match game.deal() {
            Err(DealError::NoBets) => {
                console.say("Nobody placed a bet.")?;
                return Ok(());
            }
            Err(DealError::NotEnoughCards) => {
                console.say("There are not enough cards to deal this table.")?;
                return Ok(());
            }
            dealt => dealt?,
        }

        if let Some(&card) = game.dealer().up_card() {
            console.say(format!("Dealer has a {card}\n"))?;
        }

        player_turns(console, game)?;
        dealer_turn(console, game)?;
        let result = game.settle()?;
        report(console, &result)?;

        if !console.prompt_yes_no("Play another round? [Y/N]")? {
            return Ok(());
        }
    }
}

fn take_bets<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
) -> Result<(), ConsoleError> {
    for index in 0..game.players().len() {
        let player = &game.players()[index];
        let name = player.name().to_owned();
        let chips = player.chips();

        let amount = if chips == 0 {
            console.say(format!("{name} has no chips left and sits out this round."))?;
            0
        } else {
            console.prompt_int_in(
                &format!(
                    "\n{name}, enter an integer to place your bet amount.\n\
                     You currently have ${chips} chips.\n\
                     Enter 0 to sit out this round."
                ),
                0..=to_prompt_bound(chips),
            )? as usize
        };

        game.bet(index, amount)?;
    }

    Ok(())
}

fn player_turns<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
) -> Result<(), ConsoleError> {
    while let Some(index) = game.current_player() {
        let player = &game.players()[index];
        let name = player.name().to_owned();

        console.say(format!("Dealer has: {}", describe_dealer(game.dealer())))?;
        console.say(format!(
            "{name} your hand is: {}",
            join_cards(player.hand().cards())
        ))?;
        let soft = if player.hand().is_soft() { " (soft)" } else { "" };
        console.say(format!(
            "Your hand value is: {}{soft}",
            join_totals(&player.hand().qualifying_totals())
        ))?;

        match console.prompt_move()? {
            Move::Stand => game.stand(index)?,
            Move::Hit => match game.hit(index) {
                Ok(card) => {
                    console.say(format!("{name} draws {card}"))?;
                    let player = &game.players()[index];
                    if player.hand().is_bust() {
                        console.say(format!(
                            "{name} got {}! You went bust!",
                            player.hand().min_total()
                        ))?;
                        console.say(format!(
                            "You lost ${}! You have ${} chips remaining.",
                            player.bet(),
                            player.chips()
                        ))?;
                    }
                }
                Err(ActionError::NoCards) => {
                    console.say(format!("The deck is empty. {name} stands."))?;
                    game.stand(index)?;
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    Ok(())
}

fn dealer_turn<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
) -> Result<(), ConsoleError> {
    let drawn = game.dealer_play()?;
    let dealer = game.dealer();

    if let Some(hole) = dealer.cards().get(1).filter(|_| dealer.is_hole_revealed()) {
        console.say(format!("Dealer reveals {hole}"))?;
    }
    for card in drawn {
        console.say(format!("Dealer draws {card}"))?;
    }

    match describe_total(dealer.hand()) {
        Some(total) => console.say(format!("Dealer stands on {total}")),
        None => console.say("Dealer bust!"),
    }
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: &RoundResult,
) -> Result<(), ConsoleError> {
    for player in result.players.iter().filter(|p| !p.busted) {
        let name = &player.name;
        let chips = player.chips;
        let line = match player.outcome {
            HandOutcome::Blackjack => format!(
                "{name}: Blackjack! You won ${}! You have ${chips} chips remaining.",
                player.net
            ),
            HandOutcome::Win => format!(
                "{name}: You won ${}! You have ${chips} chips remaining.",
                player.net
            ),
            HandOutcome::Tie => format!(
                "{name}: You tied! Your chips remain the same. You have ${chips} chips remaining."
            ),
            HandOutcome::Lose => format!(
                "{name}: You lost ${}! You have ${chips} chips remaining.",
                player.bet
            ),
        };
        console.say(line)?;
    }

    Ok(())
}

fn farewell<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
) -> Result<(), ConsoleError> {
    if game.finish().is_err() {
        log::warn!("table closed with a round in progress");
    }

    console.say("")?;
    for player in game.players() {
        console.say(format!(
            "{} leaves with ${} ({} won, {} tied, {} lost)! Well done!",
            player.name(),
            player.chips(),
            player.wins(),
            player.ties(),
            player.losses()
        ))?;
    }
    console.say("Thanks for playing!")
}
