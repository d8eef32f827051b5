use std::io::{BufRead, Write};

use crate::error::GuessError;
use crate::guess::{GuessOutcome, GuessingGame};

use super::{Console, ConsoleError, parse_int};

/// Prompts for guesses until the secret is found.
///
/// Returns the number of guesses taken. Non-integers and out-of-range
/// guesses are re-prompted without being counted.
///
/// # Errors
///
/// Returns an error if the console is closed or cannot be written.
pub fn play_guessing<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut GuessingGame,
) -> Result<u32, ConsoleError> {
    let prompt = format!(
        "Guess a number between {} and {}:",
        game.start(),
        game.end()
    );

    loop {
        let guess = console.prompt_valid(&prompt, parse_int)?;

        match game.guess(guess) {
            Ok(GuessOutcome::Correct(count)) => {
                let plural = if count == 1 { "" } else { "es" };
                console.say(format!("Correct! You got it in {count} guess{plural}."))?;
                return Ok(count);
            }
            Ok(GuessOutcome::Higher) if game.hints() => console.say("Wrong! Try higher.")?,
            Ok(GuessOutcome::Lower) if game.hints() => console.say("Wrong! Try lower.")?,
            Ok(GuessOutcome::Higher | GuessOutcome::Lower) => console.say("Wrong! Try again.")?,
            Err(err @ GuessError::OutOfRange { .. }) => console.say(err)?,
            Err(GuessError::Finished) => return Ok(game.guesses()),
        }
    }
}
