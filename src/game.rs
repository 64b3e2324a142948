//! The game loop
//!
//! Orchestrates rounds against injected input/output handles so the whole
//! loop is testable; the binary passes locked stdio. Attempt accounting:
//! malformed guesses (wrong length, illegal symbols) are re-prompted for
//! free, while any syntactically valid guess consumes its round whether or
//! not the dictionary knows it.

use crate::cli::Config;
use crate::core::{Hint, check_syntax, is_correct};
use crate::dictionary::{Dictionary, pick_answer};
use crate::error::Error;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

const NOT_IN_DICTIONARY: &str = "Word not found in the dictionary - try again.";

/// How one game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player guessed the answer
    Won,
    /// Attempts ran out; carries the answer for the reveal
    Lost { answer: String },
    /// Input ended before the game did; carries the answer for the reveal
    Aborted { answer: String },
}

/// Mutable per-game state, one update per consumed round
struct GameState {
    attempts_remaining: usize,
    guessed: bool,
}

/// Select an answer, load the dictionary, and play one game on stdio
///
/// The welcome banner prints before the answer is drawn, so a dictionary
/// with no word of the requested length still greets the player first.
///
/// # Errors
/// `Error::DictionaryOpen` if the dictionary cannot be read,
/// `Error::NoWordOfLength` if it holds no word of the configured length,
/// or the underlying I/O error if stdio fails mid-game.
pub fn run(config: &Config) -> Result<Outcome> {
    let stdout = io::stdout();
    let mut output = stdout.lock();
    writeln!(output, "Welcome to Wordle!")?;

    let open_failed = |source| Error::DictionaryOpen {
        path: config.dictionary_path.clone(),
        source,
    };

    let answer = pick_answer(
        &config.dictionary_path,
        config.word_length,
        &mut rand::rng(),
    )
    .map_err(open_failed)?
    .ok_or(Error::NoWordOfLength)?;

    let dictionary =
        Dictionary::load(&config.dictionary_path, config.word_length).map_err(open_failed)?;

    let stdin = io::stdin();
    play(config, &answer, &dictionary, stdin.lock(), output).context("game I/O failed")
}

/// Play one game over the given handles
///
/// Reads one line per prompt until the answer is guessed, attempts run out,
/// or input ends. All round messages go to `output`; the reveal on loss is
/// the caller's concern (it belongs on stderr).
///
/// # Errors
/// Returns any I/O error raised by the handles.
pub fn play<I, O>(
    config: &Config,
    answer: &str,
    dictionary: &Dictionary,
    mut input: I,
    mut output: O,
) -> io::Result<Outcome>
where
    I: BufRead,
    O: Write,
{
    let mut state = GameState {
        attempts_remaining: config.max_attempts,
        guessed: false,
    };
    let mut line = String::new();

    while !state.guessed && state.attempts_remaining > 0 {
        prompt(&mut output, config.word_length, state.attempts_remaining)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Outcome::Aborted {
                answer: answer.to_string(),
            });
        }
        let guess = trim_terminator(&line);

        if let Err(reason) = check_syntax(guess, config.word_length) {
            writeln!(output, "{reason}")?;
            continue;
        }

        if !dictionary.contains(guess) {
            writeln!(output, "{NOT_IN_DICTIONARY}")?;
        } else if is_correct(guess, answer) {
            writeln!(output, "Correct!")?;
            state.guessed = true;
        } else {
            writeln!(output, "{}", Hint::compute(guess, answer))?;
        }

        if !state.guessed {
            state.attempts_remaining -= 1;
        }
    }

    if state.guessed {
        Ok(Outcome::Won)
    } else {
        Ok(Outcome::Lost {
            answer: answer.to_string(),
        })
    }
}

fn prompt<O: Write>(output: &mut O, word_length: usize, attempts_remaining: usize) -> io::Result<()> {
    if attempts_remaining == 1 {
        writeln!(output, "Enter a {word_length} letter word (last attempt):")?;
    } else {
        writeln!(
            output,
            "Enter a {word_length} letter word ({attempts_remaining} attempts remaining):"
        )?;
    }
    output.flush()
}

/// Strip one trailing newline (and a carriage return before it)
fn trim_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
