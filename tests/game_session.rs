//! Full-game integration tests
//!
//! Drives `Session` with scripted input and checks what the player sees.

use numguess::game::{GameOutcome, GameState, InvalidInputPolicy, MAX_ATTEMPTS, SECRET_RANGE, Session};
use numguess::{GameError, Result};
use std::io::Cursor;

/// Play one game against a fixed secret, returning the outcome and the printed output
fn play(secret: i64, guesses: &[&str]) -> (Result<GameOutcome>, Vec<String>) {
    let input = guesses.iter().map(|g| format!("{}\n", g)).collect::<String>();
    let state = GameState::with_secret(secret).unwrap();
    let mut session = Session::new(state, Cursor::new(input), Vec::new());
    let result = session.run();
    let output = String::from_utf8(session.into_writer()).unwrap();
    // The prompt shares a line with whatever is printed after it
    let lines = output
        .lines()
        .map(|l| l.trim_start_matches("Enter your guess: ").to_string())
        .filter(|l| !l.is_empty())
        .collect();
    (result, lines)
}

/// Drop ANSI color sequences (`ESC [ ... m`)
fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[test]
fn test_scenario_win_on_fourth_guess() {
    let (result, lines) = play(10, &["5", "15", "8", "10"]);

    assert_eq!(
        result.unwrap(),
        GameOutcome::Won {
            attempts_left: 2,
            attempts_used: 3
        }
    );
    assert_eq!(
        lines,
        vec![
            "Guess the number (between 1 and 20)!",
            "Too low! Try again.",
            "Attempts left: 4",
            "Too high! Try again.",
            "Attempts left: 3",
            "Too low! Try again.",
            "Attempts left: 2",
            "Congratulations! You guessed the number!",
        ]
    );
}

#[test]
fn test_scenario_all_wrong_reveals_secret() {
    let (result, lines) = play(3, &["1", "2", "4", "5", "6"]);

    assert_eq!(result.unwrap(), GameOutcome::Lost { secret: 3 });
    assert_eq!(lines.last().unwrap(), "Sorry, you ran out of attempts! The number was 3.");
    assert!(lines.contains(&"Attempts left: 0".to_string()));
}

#[test]
fn test_game_ends_after_five_wrong_guesses() {
    // Extra input after the fifth guess is never read
    let (result, lines) = play(20, &["1", "1", "1", "1", "1", "20", "20"]);

    assert!(!result.unwrap().is_win());
    assert!(!lines.iter().any(|l| l.starts_with("Congratulations")));
    assert_eq!(lines.iter().filter(|l| l.starts_with("Too low")).count(), MAX_ATTEMPTS as usize);
}

#[test]
fn test_terminates_within_five_guesses_for_every_secret() {
    let guesses = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];
    for secret in SECRET_RANGE {
        let (result, lines) = play(secret, &guesses);
        let evaluated = lines
            .iter()
            .filter(|l| l.starts_with("Too") || l.starts_with("Congratulations"))
            .count();
        assert!(result.is_ok(), "secret={}", secret);
        assert!(evaluated <= MAX_ATTEMPTS as usize, "secret={}", secret);
    }
}

#[test]
fn test_first_guess_wins_without_spending_attempts() {
    let (result, lines) = play(7, &["7"]);

    assert_eq!(
        result.unwrap(),
        GameOutcome::Won {
            attempts_left: MAX_ATTEMPTS,
            attempts_used: 0
        }
    );
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_out_of_range_guess_gets_feedback() {
    let (result, lines) = play(1, &["0", "25", "1"]);

    assert!(result.unwrap().is_win());
    assert_eq!(lines[1], "Too low! Try again.");
    assert_eq!(lines[3], "Too high! Try again.");
}

#[test]
fn test_malformed_input_is_reprompted_by_default() {
    let (result, lines) = play(12, &["twelve", "", "12"]);

    assert_eq!(
        result.unwrap(),
        GameOutcome::Won {
            attempts_left: MAX_ATTEMPTS,
            attempts_used: 0
        }
    );
    assert_eq!(lines.iter().filter(|l| *l == "Please enter a whole number.").count(), 2);
}

#[test]
fn test_malformed_input_aborts_in_strict_mode() {
    let state = GameState::with_secret(12).unwrap();
    let mut session =
        Session::new(state, Cursor::new("3\nx\n12\n"), Vec::new()).with_policy(InvalidInputPolicy::Abort);

    let err = session.run().unwrap_err();
    assert!(matches!(err, GameError::InvalidGuess(ref text) if text == "x"));
    assert_eq!(session.state().attempts_left(), MAX_ATTEMPTS - 1);
}

#[test]
fn test_input_closed_mid_game() {
    let (result, lines) = play(12, &["3", "4"]);

    assert!(matches!(result, Err(GameError::InputClosed)));
    assert_eq!(lines.last().unwrap(), "Attempts left: 3");
}

#[test]
fn test_colored_session_keeps_message_text() {
    colored::control::set_override(true);

    let state = GameState::with_secret(10).unwrap();
    let mut session = Session::new(state, Cursor::new("5\n1\n1\n1\n1\n"), Vec::new()).with_color(true);
    let outcome = session.run().unwrap();
    let output = String::from_utf8(session.into_writer()).unwrap();

    colored::control::unset_override();

    assert_eq!(outcome, GameOutcome::Lost { secret: 10 });
    assert!(output.contains('\u{1b}'));

    let plain = strip_ansi(&output);
    assert!(plain.starts_with("Guess the number (between 1 and 20)!\n"));
    assert!(plain.contains("Too low! Try again.\nAttempts left: 4\n"));
    assert!(plain.contains("Attempts left: 1\n"));
    assert!(plain.contains("Attempts left: 0\n"));
    assert!(plain.ends_with("Sorry, you ran out of attempts! The number was 10.\n"));
}
