//! Fatal error taxonomy
//!
//! Errors that abort the game before any round is played, each mapped to its
//! own exit code. Recoverable per-round failures live with the guess
//! evaluator and never reach this type.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Usage line printed on any malformed invocation
pub const USAGE: &str = "Usage: wordle [-len word-length] [-max max-guesses] [dictionary]";

/// A fatal, exit-code-bearing error
#[derive(Debug)]
pub enum Error {
    /// Malformed command line
    Usage,
    /// The dictionary file could not be opened for reading
    DictionaryOpen { path: PathBuf, source: io::Error },
    /// The dictionary opened fine but holds no word of the requested length
    NoWordOfLength,
}

impl Error {
    /// The process exit code for this error
    ///
    /// Usage errors exit 1; both dictionary conditions exit 2.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage => 1,
            Self::DictionaryOpen { .. } | Self::NoWordOfLength => 2,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "{USAGE}"),
            Self::DictionaryOpen { path, .. } => {
                write!(
                    f,
                    "wordle: dictionary file \"{}\" cannot be opened",
                    path.display()
                )
            }
            Self::NoWordOfLength => {
                write!(
                    f,
                    "The dictionary provided does not contain a number of the requested size"
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DictionaryOpen { source, .. } => Some(source),
            Self::Usage | Self::NoWordOfLength => None,
        }
    }
}
