//! House rules for deciding a player hand against the dealer.

use core::cmp::Ordering;

use crate::error::HandError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::HandOutcome;

/// Decides a player's hand against the dealer's final hand.
///
/// Rules are applied in order:
/// 1. a bust player loses, whatever the dealer holds;
/// 2. a bust dealer pays every remaining hand even money;
/// 3. a dealer blackjack ties a player blackjack and beats everything else;
/// 4. a player blackjack wins at the blackjack rate;
/// 5. otherwise the higher best total wins.
///
/// # Errors
///
/// Returns an error if either hand is empty.
pub fn adjudicate(player: &Hand, dealer: &Hand) -> Result<HandOutcome, HandError> {
    if player.is_empty() || dealer.is_empty() {
        return Err(HandError::Empty);
    }
    if player.is_bust() {
        return Ok(HandOutcome::Lose);
    }
    if dealer.is_bust() {
        return Ok(HandOutcome::Win);
    }
    if dealer.is_blackjack() {
        return Ok(if player.is_blackjack() {
            HandOutcome::Tie
        } else {
            HandOutcome::Lose
        });
    }
    if player.is_blackjack() {
        return Ok(HandOutcome::Blackjack);
    }

    Ok(match player.compare(dealer)? {
        Ordering::Greater => HandOutcome::Win,
        Ordering::Equal => HandOutcome::Tie,
        Ordering::Less => HandOutcome::Lose,
    })
}

/// Net chip change for a settled bet.
///
/// Computed in `i128` so that any `usize` bet, scaled by any `u32` ratio,
/// is exact and cannot wrap.
#[must_use]
pub fn payout(outcome: HandOutcome, bet: usize, options: &GameOptions) -> i128 {
    let stake = bet as i128;
    match outcome {
        HandOutcome::Win => stake,
        HandOutcome::Blackjack => {
            let (numerator, denominator) = options.blackjack_pays;
            let winnings = options
                .rounding_blackjack
                .apply(bet as u128 * u128::from(numerator), u128::from(denominator));
            // At most usize::MAX * u32::MAX, well inside i128.
            i128::try_from(winnings).unwrap_or(i128::MAX)
        }
        HandOutcome::Tie => 0,
        HandOutcome::Lose => -stake,
    }
}
