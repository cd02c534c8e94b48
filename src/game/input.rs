//! Turning a line of player input into a guess.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// What to do when a line is not a whole number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidInputPolicy {
    /// Say so and ask again, without spending an attempt
    #[default]
    Reprompt,
    /// End the game with `GameError::InvalidGuess`
    Abort,
}

/// Parse one input line into a guess.
///
/// Surrounding whitespace and a leading sign are accepted. Values outside
/// the secret range are still valid guesses.
pub fn parse_guess(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| GameError::InvalidGuess(trimmed.to_string()))
}
