//! Core domain logic for the game
//!
//! Guess validation and hint computation with no I/O. Everything here is
//! pure and driven entirely by its inputs.

pub mod guess;
pub mod hint;

pub use guess::{GuessError, check_syntax, is_correct};
pub use hint::Hint;
