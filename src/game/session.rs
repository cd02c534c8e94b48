//! One interactive game over any reader/writer pair.
//!
//! Each round: prompt → read → evaluate → feedback → (repeat until won or out of attempts)

use log::{debug, info, trace, warn};
use std::io::{BufRead, Write};

use super::input::{InvalidInputPolicy, parse_guess};
use super::message::Message;
use super::outcome::{Feedback, GameOutcome};
use super::state::GameState;
use crate::error::{GameError, Result};

/// Drives a `GameState` from player input
pub struct Session<R, W> {
    state: GameState,
    reader: R,
    writer: W,
    policy: InvalidInputPolicy,
    color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with plain output and the re-prompt policy
    pub fn new(state: GameState, reader: R, writer: W) -> Self {
        Self {
            state,
            reader,
            writer,
            policy: InvalidInputPolicy::default(),
            color: false,
        }
    }

    pub fn with_policy(mut self, policy: InvalidInputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the session, returning the writer (for inspecting output)
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Play until the secret is found or attempts run out
    pub fn run(&mut self) -> Result<GameOutcome> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }

        info!("Starting game with {} attempts", self.state.attempts_left());
        trace!("Secret is {}", self.state.secret());
        self.say(Message::Intro)?;

        loop {
            let guess = self.read_guess()?;
            let feedback = self.state.guess(guess)?;
            debug!(
                "Guess {} -> {:?} ({} attempts left)",
                guess,
                feedback,
                self.state.attempts_left()
            );

            self.say(Message::for_feedback(feedback))?;
            if feedback != Feedback::Correct {
                self.say(Message::AttemptsLeft(self.state.attempts_left()))?;
            }

            if let Some(outcome) = self.state.outcome() {
                if let GameOutcome::Lost { secret } = outcome {
                    self.say(Message::Loss { secret })?;
                }
                self.writer.flush()?;
                info!("Game finished: {:?}", outcome);
                return Ok(outcome);
            }
        }
    }

    fn read_guess(&mut self) -> Result<i64> {
        loop {
            self.say(Message::Prompt)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                warn!("Input closed with {} attempts left", self.state.attempts_left());
                return Err(GameError::InputClosed);
            }

            match parse_guess(&line) {
                Ok(guess) => return Ok(guess),
                Err(e) => match self.policy {
                    InvalidInputPolicy::Abort => return Err(e),
                    InvalidInputPolicy::Reprompt => {
                        warn!("Rejected input: {}", e);
                        self.say(Message::InvalidInput)?;
                    }
                },
            }
        }
    }

    fn say(&mut self, message: Message) -> Result<()> {
        if self.color {
            write!(self.writer, "{}", message.colored())?;
        } else {
            write!(self.writer, "{}", message)?;
        }
        if message.ends_line() {
            writeln!(self.writer)?;
        }
        Ok(())
    }
}
