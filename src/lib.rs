//! Wordle
//!
//! A command-line word-guessing game: a random word of configurable length
//! is drawn from a dictionary file, and the player gets a fixed number of
//! attempts, with per-letter feedback after each valid guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle::core::Hint;
//!
//! // Uppercase: right letter, right spot. Lowercase: right letter,
//! // wrong spot. Dash: absent.
//! let hint = Hint::compute("boost", "robot");
//! assert_eq!(hint.to_string(), "bOo-T");
//! ```

// Argument validation
pub mod cli;

// Guess checks and hint computation
pub mod core;

// Dictionary store and answer selection
pub mod dictionary;

// Fatal error taxonomy and exit codes
pub mod error;

// The round loop
pub mod game;

pub use error::Error;
