//! Number-guessing game.

use core::cmp::Ordering;
use core::ops::RangeInclusive;

use rand::Rng;

use crate::error::{GuessError, RangeError};

/// The result of a single accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The secret is higher than the guess.
    Higher,
    /// The secret is lower than the guess.
    Lower,
    /// The guess matched; carries the number of guesses taken.
    Correct(u32),
}

/// A secret integer drawn uniformly from an inclusive range.
#[derive(Debug, Clone)]
pub struct GuessingGame {
    range: RangeInclusive<i64>,
    hints: bool,
    secret: i64,
    guesses: u32,
    solved: bool,
}

impl GuessingGame {
    /// Creates a game over `start..=end` with a random secret.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is greater than `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use parlour::GuessingGame;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    /// assert!(GuessingGame::new(10, 5, true, &mut rng).is_err());
    /// ```
    pub fn new<R: Rng + ?Sized>(
        start: i64,
        end: i64,
        hints: bool,
        rng: &mut R,
    ) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }

        let secret = rng.random_range(start..=end);
        log::debug!("secret drawn from {start}..={end}");

        Ok(Self {
            range: start..=end,
            hints,
            secret,
            guesses: 0,
            solved: false,
        })
    }

    /// Lowest accepted guess.
    #[must_use]
    pub const fn start(&self) -> i64 {
        *self.range.start()
    }

    /// Highest accepted guess.
    #[must_use]
    pub const fn end(&self) -> i64 {
        *self.range.end()
    }

    /// Whether higher/lower hints are shown after a wrong guess.
    #[must_use]
    pub const fn hints(&self) -> bool {
        self.hints
    }

    /// Number of accepted guesses so far.
    #[must_use]
    pub const fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Whether the secret has been found.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Checks a guess against the secret.
    ///
    /// Out-of-range guesses are rejected and not counted.
    ///
    /// # Errors
    ///
    /// Returns an error if the guess is outside the range or the secret was
    /// already found.
    pub fn guess(&mut self, guess: i64) -> Result<GuessOutcome, GuessError> {
        if self.solved {
            return Err(GuessError::Finished);
        }
        if !self.range.contains(&guess) {
            return Err(GuessError::OutOfRange {
                guess,
                start: self.start(),
                end: self.end(),
            });
        }

        self.guesses += 1;
        Ok(match guess.cmp(&self.secret) {
            Ordering::Less => GuessOutcome::Higher,
            Ordering::Greater => GuessOutcome::Lower,
            Ordering::Equal => {
                self.solved = true;
                log::info!("secret found after {} guesses", self.guesses);
                GuessOutcome::Correct(self.guesses)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn inverted_range_fails() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            GuessingGame::new(10, 5, false, &mut rng).unwrap_err(),
            RangeError::Inverted { start: 10, end: 5 }
        );
    }

    #[test]
    fn single_value_range_is_solved_first_try() {
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut game = GuessingGame::new(0, 0, true, &mut rng).unwrap();
            assert_eq!(game.guess(0), Ok(GuessOutcome::Correct(1)));
            assert!(game.is_solved());
        }
    }

    #[test]
    fn out_of_range_guess_is_not_counted() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut game = GuessingGame::new(1, 10, true, &mut rng).unwrap();
        assert_eq!(
            game.guess(11),
            Err(GuessError::OutOfRange {
                guess: 11,
                start: 1,
                end: 10
            })
        );
        assert_eq!(game.guesses(), 0);
    }

    #[test]
    fn binary_search_finds_secret_with_hints() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut game = GuessingGame::new(1, 100, true, &mut rng).unwrap();
        let (mut low, mut high) = (1, 100);
        loop {
            let mid = (low + high) / 2;
            match game.guess(mid).unwrap() {
                GuessOutcome::Higher => low = mid + 1,
                GuessOutcome::Lower => high = mid - 1,
                GuessOutcome::Correct(count) => {
                    assert!(count <= 7);
                    assert_eq!(count, game.guesses());
                    break;
                }
            }
        }
        assert_eq!(game.guess(low), Err(GuessError::Finished));
    }
}
