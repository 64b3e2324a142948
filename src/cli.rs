//! Command-line argument validation
//!
//! The accepted grammar is fixed by the external contract:
//!
//! ```text
//! wordle [-len word-length] [-max max-guesses] [dictionary]
//! ```
//!
//! `-len` and `-max` each take exactly one single-digit value in 3..=9 and
//! may appear at most once. The dictionary path, when given, is always the
//! final token. A malformed invocation is a usage error (exit 1); a
//! dictionary that cannot be opened is its own error (exit 2).

use crate::error::Error;
use std::fs::File;
use std::path::PathBuf;

/// Word length used when `-len` is absent
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Attempt count used when `-max` is absent
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Platform word list used when no dictionary path is given
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

const MAX_ARGS: usize = 5;

/// Validated game configuration
///
/// Invariant: `word_length` and `max_attempts` are both in 3..=9.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub word_length: usize,
    pub max_attempts: usize,
    pub dictionary_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
        }
    }
}

/// Validate raw arguments (program name excluded) into a `Config`
///
/// Recognized forms:
/// - no arguments: all defaults;
/// - a single argument: a dictionary path, which must not start with `-`;
/// - `-len N` and/or `-max N` in any order, optionally followed by one
///   trailing dictionary path.
///
/// A user-supplied dictionary is opened here once as the readability check;
/// the game performs its own reads later.
///
/// # Errors
/// `Error::Usage` for any malformed shape, `Error::DictionaryOpen` when the
/// named dictionary cannot be opened for reading.
pub fn parse(args: &[String]) -> Result<Config, Error> {
    if args.len() > MAX_ARGS {
        return Err(Error::Usage);
    }
    if args.iter().any(|arg| arg.trim().is_empty()) {
        return Err(Error::Usage);
    }

    let mut word_length = None;
    let mut max_attempts = None;
    let mut dictionary = None;

    if let [only] = args {
        if only.starts_with('-') {
            return Err(Error::Usage);
        }
        dictionary = Some(only.clone());
    } else {
        let mut i = 0;
        while i < args.len() {
            let token = &args[i];
            match token.as_str() {
                "-len" => {
                    if word_length.is_some() {
                        return Err(Error::Usage);
                    }
                    word_length = Some(flag_value(args.get(i + 1))?);
                    i += 2;
                }
                "-max" => {
                    if max_attempts.is_some() {
                        return Err(Error::Usage);
                    }
                    max_attempts = Some(flag_value(args.get(i + 1))?);
                    i += 2;
                }
                _ => {
                    // Only the final token may name the dictionary, and a
                    // path is always longer than one character.
                    if i != args.len() - 1 || token.chars().count() <= 1 {
                        return Err(Error::Usage);
                    }
                    dictionary = Some(token.clone());
                    i += 1;
                }
            }
        }
    }

    let dictionary_path = match dictionary {
        Some(path) => {
            let path = PathBuf::from(path);
            File::open(&path).map_err(|source| Error::DictionaryOpen {
                path: path.clone(),
                source,
            })?;
            path
        }
        None => PathBuf::from(DEFAULT_DICTIONARY),
    };

    Ok(Config {
        word_length: word_length.unwrap_or(DEFAULT_WORD_LENGTH),
        max_attempts: max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
        dictionary_path,
    })
}

/// A flag value is exactly one character, a digit in 3..=9
fn flag_value(token: Option<&String>) -> Result<usize, Error> {
    let token = token.ok_or(Error::Usage)?;
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(digit @ '3'..='9'), None) => Ok(digit as usize - '0' as usize),
        _ => Err(Error::Usage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    fn dictionary_fixture() -> (TempDir, String) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("words");
        fs::write(&path, "crane\nslate\n").unwrap();
        (temp, path.to_string_lossy().into_owned())
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.dictionary_path, PathBuf::from(DEFAULT_DICTIONARY));
    }

    #[test]
    fn single_argument_is_a_dictionary_path() {
        let (_temp, path) = dictionary_fixture();
        let config = parse(&args(&[&path])).unwrap();

        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.dictionary_path, PathBuf::from(&path));
    }

    #[test]
    fn single_flag_like_argument_is_a_usage_error() {
        assert!(matches!(parse(&args(&["-len"])), Err(Error::Usage)));
        assert!(matches!(parse(&args(&["-max"])), Err(Error::Usage)));
        assert!(matches!(parse(&args(&["-anything"])), Err(Error::Usage)));
    }

    #[test]
    fn len_and_max_flags_set_the_configuration() {
        let (_temp, path) = dictionary_fixture();
        let config = parse(&args(&["-len", "3", "-max", "9", &path])).unwrap();

        assert_eq!(config.word_length, 3);
        assert_eq!(config.max_attempts, 9);
        assert_eq!(config.dictionary_path, PathBuf::from(&path));
    }

    #[test]
    fn flags_accept_any_order() {
        let config = parse(&args(&["-max", "4", "-len", "7"])).unwrap();

        assert_eq!(config.word_length, 7);
        assert_eq!(config.max_attempts, 4);
        assert_eq!(config.dictionary_path, PathBuf::from(DEFAULT_DICTIONARY));
    }

    #[test]
    fn boundary_digits_are_accepted() {
        let low = parse(&args(&["-len", "3"])).unwrap();
        let high = parse(&args(&["-len", "9"])).unwrap();

        assert_eq!(low.word_length, 3);
        assert_eq!(high.word_length, 9);
    }

    #[test]
    fn out_of_range_digits_are_usage_errors() {
        assert!(matches!(parse(&args(&["-len", "2"])), Err(Error::Usage)));
        assert!(matches!(parse(&args(&["-max", "0"])), Err(Error::Usage)));
    }

    #[test]
    fn multi_character_values_are_usage_errors() {
        // "10" and "33" are in no sense single digits, even though their
        // numeric values bracket the range.
        assert!(matches!(parse(&args(&["-len", "10"])), Err(Error::Usage)));
        assert!(matches!(parse(&args(&["-max", "33"])), Err(Error::Usage)));
    }

    #[test]
    fn non_numeric_values_are_usage_errors() {
        assert!(matches!(parse(&args(&["-len", "a"])), Err(Error::Usage)));
        assert!(matches!(parse(&args(&["-max", "-"])), Err(Error::Usage)));
    }

    #[test]
    fn missing_flag_value_is_a_usage_error() {
        assert!(matches!(
            parse(&args(&["-max", "5", "-len"])),
            Err(Error::Usage)
        ));
    }

    #[test]
    fn duplicate_flags_are_usage_errors_regardless_of_values() {
        assert!(matches!(
            parse(&args(&["-len", "5", "-len", "5"])),
            Err(Error::Usage)
        ));
        assert!(matches!(
            parse(&args(&["-max", "3", "-max", "4"])),
            Err(Error::Usage)
        ));
    }

    #[test]
    fn blank_arguments_are_usage_errors() {
        assert!(matches!(parse(&args(&[" "])), Err(Error::Usage)));
        assert!(matches!(
            parse(&args(&["-len", "5", "  "])),
            Err(Error::Usage)
        ));
    }

    #[test]
    fn more_than_five_arguments_is_a_usage_error() {
        let many = args(&["-len", "5", "-max", "6", "words", "extra"]);
        assert!(matches!(parse(&many), Err(Error::Usage)));
    }

    #[test]
    fn dictionary_anywhere_but_last_is_a_usage_error() {
        assert!(matches!(
            parse(&args(&["words.txt", "-len", "5"])),
            Err(Error::Usage)
        ));
    }

    #[test]
    fn unrecognized_flag_before_the_end_is_a_usage_error() {
        assert!(matches!(
            parse(&args(&["-verbose", "words.txt"])),
            Err(Error::Usage)
        ));
    }

    #[test]
    fn stray_single_character_token_is_a_usage_error() {
        assert!(matches!(
            parse(&args(&["-len", "5", "x"])),
            Err(Error::Usage)
        ));
    }

    #[test]
    fn unopenable_dictionary_is_its_own_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent").to_string_lossy().into_owned();

        assert!(matches!(
            parse(&args(&[&path])),
            Err(Error::DictionaryOpen { .. })
        ));
        assert!(matches!(
            parse(&args(&["-len", "5", &path])),
            Err(Error::DictionaryOpen { .. })
        ));
    }

    #[test]
    fn final_dash_token_is_tried_as_a_dictionary() {
        // Not a recognized flag, but in dictionary position; the open
        // check decides its fate.
        assert!(matches!(
            parse(&args(&["-len", "5", "-missing-dictionary"])),
            Err(Error::DictionaryOpen { .. })
        ));
    }

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();

        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.dictionary_path, PathBuf::from(DEFAULT_DICTIONARY));
    }
}
