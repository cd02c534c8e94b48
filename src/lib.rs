//! Numguess - a console number-guessing game
//!
//! A secret between 1 and 20 is drawn at start; the player has five wrong
//! guesses to find it, with "too low"/"too high" feedback after each.

pub mod error;
pub mod game;

pub use error::{GameError, Result};
