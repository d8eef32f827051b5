//! Line-oriented console drivers for the games.
//!
//! Every prompt loops until the input validates, so a typo is never fatal.
//! Drivers are generic over [`BufRead`] and [`Write`] so whole sessions can be
//! scripted.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{ActionError, BetError, DealError, JoinError, RoundError, ShowdownError};

mod blackjack;
mod guess;

pub use blackjack::{play_blackjack, seat_players};
pub use guess::play_guessing;

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Input reached end of file.
    #[error("input closed")]
    Closed,
    /// A seat could not be taken.
    #[error(transparent)]
    Join(#[from] JoinError),
    /// A round could not start or end.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// A bet was refused.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The cards could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A move was refused.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer could not play or the round could not be settled.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}

/// Reasons a line of input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The text is not an integer.
    #[error("Please enter an integer")]
    NotAnInteger,
    /// The integer is outside the accepted range.
    #[error("Please enter a number between {min} and {max}")]
    OutOfRange {
        /// Lowest accepted value.
        min: i64,
        /// Highest accepted value.
        max: i64,
    },
    /// The text is not one of the offered choices.
    #[error("Please enter one of: {0}")]
    UnknownChoice(&'static str),
}

/// A player's move during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl FromStr for Move {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" => Ok(Self::Hit),
            "S" => Ok(Self::Stand),
            _ => Err(InputError::UnknownChoice("H, S")),
        }
    }
}

/// Parses an integer, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns an error if the text is not an integer.
pub fn parse_int(text: &str) -> Result<i64, InputError> {
    text.trim().parse().map_err(|_| InputError::NotAnInteger)
}

/// Parses an integer that must fall within `range`.
///
/// # Errors
///
/// Returns an error if the text is not an integer or lies outside `range`.
pub fn parse_int_in(text: &str, range: &RangeInclusive<i64>) -> Result<i64, InputError> {
    let value = parse_int(text)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Parses a yes/no answer.
///
/// # Errors
///
/// Returns an error unless the text is `Y` or `N`, in either case.
pub fn parse_yes_no(text: &str) -> Result<bool, InputError> {
    match text.trim().to_ascii_uppercase().as_str() {
        "Y" => Ok(true),
        "N" => Ok(false),
        _ => Err(InputError::UnknownChoice("Y, N")),
    }
}

/// A prompt/response channel over a reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `prompt` and reads one trimmed line of input.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, or an I/O error.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim().to_owned())
    }

    /// Prompts until `validate` accepts the input, printing each rejection.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, or an I/O error.
    pub fn prompt_valid<T, F>(&mut self, prompt: &str, mut validate: F) -> Result<T, ConsoleError>
    where
        F: FnMut(&str) -> Result<T, InputError>,
    {
        loop {
            let line = self.prompt_line(prompt)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(err)?,
            }
        }
    }

    /// Prompts until an integer within `range` is entered.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, or an I/O error.
    pub fn prompt_int_in(
        &mut self,
        prompt: &str,
        range: RangeInclusive<i64>,
    ) -> Result<i64, ConsoleError> {
        self.prompt_valid(prompt, |text| parse_int_in(text, &range))
    }

    /// Prompts until `H` or `S` is entered.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, or an I/O error.
    pub fn prompt_move(&mut self) -> Result<Move, ConsoleError> {
        self.prompt_valid(r#"Enter "H" to hit or "S" to stand:"#, str::parse::<Move>)
    }

    /// Prompts until `Y` or `N` is entered.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input, or an I/O error.
    pub fn prompt_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        self.prompt_valid(prompt, parse_yes_no)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn parses_integers_with_whitespace() {
        assert_eq!(parse_int(" 42\n"), Ok(42));
        assert_eq!(parse_int("-3"), Ok(-3));
        assert_eq!(parse_int("4.5"), Err(InputError::NotAnInteger));
        assert_eq!(parse_int(""), Err(InputError::NotAnInteger));
    }

    #[test]
    fn range_check_reports_bounds() {
        assert_eq!(parse_int_in("7", &(1..=7)), Ok(7));
        assert_eq!(
            parse_int_in("8", &(1..=7)),
            Err(InputError::OutOfRange { min: 1, max: 7 })
        );
    }

    #[test]
    fn moves_are_case_insensitive() {
        assert_eq!("h".parse::<Move>(), Ok(Move::Hit));
        assert_eq!(" S ".parse::<Move>(), Ok(Move::Stand));
        assert!("hit me".parse::<Move>().is_err());
        assert_eq!(parse_yes_no("n"), Ok(false));
        assert!(parse_yes_no("maybe").is_err());
    }

    #[test]
    fn reprompts_until_valid() {
        let mut console = console("abc\n99\n3\n");
        assert_eq!(console.prompt_int_in("Pick:", 1..=7).unwrap(), 3);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Pick:").count(), 3);
        assert!(output.contains("Please enter an integer"));
        assert!(output.contains("Please enter a number between 1 and 7"));
    }

    #[test]
    fn end_of_input_closes_session() {
        let mut console = console("x\n");
        assert!(matches!(console.prompt_move(), Err(ConsoleError::Closed)));
    }
}
