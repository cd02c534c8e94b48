//! Error types for numguess
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while playing
#[derive(Debug, Error)]
pub enum GameError {
    /// Input line was not a whole number
    #[error("Invalid guess: {0:?}")]
    InvalidGuess(String),

    /// Input stream ended before the game finished
    #[error("Input closed before the game finished")]
    InputClosed,

    /// A guess was made after the game ended
    #[error("Game is already over")]
    GameOver,

    /// Secret outside the playable range
    #[error("Secret {0} is out of range")]
    SecretOutOfRange(i64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
