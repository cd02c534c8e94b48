//! The number-guessing game
//!
//! - GameState: the secret and remaining attempts
//! - Feedback / GameOutcome: result of a guess and of a whole game
//! - Message: every line printed to the player
//! - Session: runs a game over a reader/writer pair

pub mod input;
pub mod message;
pub mod outcome;
pub mod session;
pub mod state;

pub use input::{InvalidInputPolicy, parse_guess};
pub use message::Message;
pub use outcome::{Feedback, GameOutcome};
pub use session::Session;
pub use state::{GameState, MAX_ATTEMPTS, SECRET_RANGE};
