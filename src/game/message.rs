//! Everything the game prints.

use colored::{ColoredString, Colorize};
use std::fmt;

use super::outcome::Feedback;
use super::state::SECRET_RANGE;

/// A line of game output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Intro,
    Prompt,
    Win,
    TooLow,
    TooHigh,
    AttemptsLeft(u32),
    Loss { secret: i64 },
    InvalidInput,
}

impl Message {
    /// Message for a wrong-guess feedback, `Win` for a correct one
    pub fn for_feedback(feedback: Feedback) -> Self {
        match feedback {
            Feedback::TooLow => Message::TooLow,
            Feedback::TooHigh => Message::TooHigh,
            Feedback::Correct => Message::Win,
        }
    }

    /// Prompt stays on the same line as the player's input
    pub fn ends_line(&self) -> bool {
        !matches!(self, Message::Prompt)
    }

    /// Render with terminal colors
    pub fn colored(&self) -> ColoredString {
        let text = self.to_string();
        match self {
            Message::Intro => text.bold(),
            Message::Prompt => text.cyan(),
            Message::Win => text.green().bold(),
            Message::TooLow | Message::TooHigh => text.yellow(),
            Message::AttemptsLeft(n) if *n <= 1 => text.red(),
            Message::AttemptsLeft(_) => text.normal(),
            Message::Loss { .. } => text.red().bold(),
            Message::InvalidInput => text.magenta(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Intro => write!(
                f,
                "Guess the number (between {} and {})!",
                SECRET_RANGE.start(),
                SECRET_RANGE.end()
            ),
            Message::Prompt => write!(f, "Enter your guess: "),
            Message::Win => write!(f, "Congratulations! You guessed the number!"),
            Message::TooLow => write!(f, "Too low! Try again."),
            Message::TooHigh => write!(f, "Too high! Try again."),
            Message::AttemptsLeft(n) => write!(f, "Attempts left: {}", n),
            Message::Loss { secret } => {
                write!(f, "Sorry, you ran out of attempts! The number was {}.", secret)
            }
            Message::InvalidInput => write!(f, "Please enter a whole number."),
        }
    }
}
