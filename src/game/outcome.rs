//! Guess feedback and game outcome types.

/// Feedback for a single evaluated guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Guess was below the secret
    TooLow,
    /// Guess was above the secret
    TooHigh,
    /// Guess matched the secret
    Correct,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Player found the secret
    Won { attempts_left: u32, attempts_used: u32 },
    /// Player ran out of attempts
    Lost { secret: i64 },
}

impl GameOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, GameOutcome::Won { .. })
    }
}
