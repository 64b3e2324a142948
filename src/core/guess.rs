//! Guess validation and correctness checks
//!
//! A guess passes through two gates before the game consults the dictionary:
//! its visible length must match the configured word length, and it must be
//! made of letters only. Both failures carry their own user-facing message
//! and neither consumes an attempt.

use std::fmt;

/// A recoverable per-round validation failure
///
/// The `Display` text is exactly what the game prints before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Visible length differs from the configured word length
    WrongLength { expected: usize },
    /// The guess contains a digit, punctuation, or whitespace character
    NonAlphabetic,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected } => {
                write!(f, "Words must be {expected} letters long - try again.")
            }
            Self::NonAlphabetic => {
                write!(f, "Words must contain only letters - try again.")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Validate the syntax of a guess against the configured word length
///
/// The length gate runs first: a guess of the wrong size reports
/// `WrongLength` even when it also contains illegal characters. Only ASCII
/// letters are accepted.
///
/// # Errors
/// Returns `GuessError::WrongLength` or `GuessError::NonAlphabetic`.
///
/// # Examples
/// ```
/// use wordle::core::guess::{check_syntax, GuessError};
///
/// assert!(check_syntax("crane", 5).is_ok());
/// assert_eq!(
///     check_syntax("cranes", 5),
///     Err(GuessError::WrongLength { expected: 5 })
/// );
/// assert_eq!(check_syntax("cran3", 5), Err(GuessError::NonAlphabetic));
/// ```
pub fn check_syntax(guess: &str, word_length: usize) -> Result<(), GuessError> {
    if guess.chars().count() != word_length {
        return Err(GuessError::WrongLength {
            expected: word_length,
        });
    }

    if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GuessError::NonAlphabetic);
    }

    Ok(())
}

/// Case-insensitive exact-match test across the full answer
///
/// True only when every position matches; a length mismatch is never a
/// match.
#[must_use]
pub fn is_correct(guess: &str, answer: &str) -> bool {
    guess.chars().count() == answer.chars().count()
        && guess
            .chars()
            .zip(answer.chars())
            .all(|(g, a)| g.to_ascii_lowercase() == a.to_ascii_lowercase())
}
