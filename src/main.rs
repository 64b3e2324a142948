//! Wordle - CLI entry point
//!
//! Thin wiring over the library: collect arguments, play one game, translate
//! the result into the documented exit codes (0 win, 1 usage, 2 dictionary,
//! 3 out of attempts or input).

use anyhow::Result;
use std::env;
use std::process::ExitCode;
use wordle::cli;
use wordle::error::Error;
use wordle::game::{self, Outcome};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(outcome) => report_outcome(&outcome),
        Err(err) => report_error(&err),
    }
}

fn run(args: &[String]) -> Result<Outcome> {
    let config = cli::parse(args)?;
    game::run(&config)
}

fn report_outcome(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Won => ExitCode::SUCCESS,
        Outcome::Lost { answer } => {
            eprintln!("Bad luck - the word is {answer}");
            ExitCode::from(3)
        }
        Outcome::Aborted { answer } => {
            eprintln!("Bad luck - the word is \"{answer}\".");
            ExitCode::from(3)
        }
    }
}

fn report_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<Error>() {
        // The no-word report goes to stdout; the rest belong on stderr.
        Some(fatal @ Error::NoWordOfLength) => {
            println!("{fatal}");
            ExitCode::from(fatal.exit_code())
        }
        Some(fatal) => {
            eprintln!("{fatal}");
            ExitCode::from(fatal.exit_code())
        }
        None => {
            eprintln!("wordle: {err:#}");
            ExitCode::FAILURE
        }
    }
}
