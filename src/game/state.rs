//! Game state: the secret and the remaining attempt budget.

use rand::Rng;
use std::ops::RangeInclusive;

use super::outcome::{Feedback, GameOutcome};
use crate::error::{GameError, Result};

/// Closed range the secret is drawn from
pub const SECRET_RANGE: RangeInclusive<i64> = 1..=20;

/// Attempts a player gets per game
pub const MAX_ATTEMPTS: u32 = 5;

/// State of a single game.
///
/// The secret never changes after construction. Attempts only go down, and
/// only on a wrong guess, so a game is over after at most `MAX_ATTEMPTS`
/// evaluated guesses.
#[derive(Debug, Clone)]
pub struct GameState {
    secret: i64,
    attempts_left: u32,
    won: bool,
}

impl GameState {
    /// Start a game with a secret drawn uniformly from `SECRET_RANGE`
    pub fn new() -> Self {
        let secret = rand::rng().random_range(SECRET_RANGE);
        Self {
            secret,
            attempts_left: MAX_ATTEMPTS,
            won: false,
        }
    }

    /// Start a game with a known secret
    pub fn with_secret(secret: i64) -> Result<Self> {
        if !SECRET_RANGE.contains(&secret) {
            return Err(GameError::SecretOutOfRange(secret));
        }
        Ok(Self {
            secret,
            attempts_left: MAX_ATTEMPTS,
            won: false,
        })
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Wrong guesses made so far
    pub fn attempts_used(&self) -> u32 {
        MAX_ATTEMPTS - self.attempts_left
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_over(&self) -> bool {
        self.won || self.attempts_left == 0
    }

    /// Evaluate one guess.
    ///
    /// A correct guess leaves the attempt counter untouched; any other guess
    /// costs exactly one attempt.
    pub fn guess(&mut self, guess: i64) -> Result<Feedback> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let feedback = if guess == self.secret {
            self.won = true;
            Feedback::Correct
        } else if guess < self.secret {
            Feedback::TooLow
        } else {
            Feedback::TooHigh
        };

        if feedback != Feedback::Correct {
            self.attempts_left -= 1;
        }
        Ok(feedback)
    }

    /// Outcome once the game is over, `None` while still in play
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.won {
            Some(GameOutcome::Won {
                attempts_left: self.attempts_left,
                attempts_used: self.attempts_used(),
            })
        } else if self.attempts_left == 0 {
            Some(GameOutcome::Lost { secret: self.secret })
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
