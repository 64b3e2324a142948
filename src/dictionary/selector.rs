//! Random answer selection
//!
//! The answer is drawn in a file pass independent of the loaded store, so a
//! dictionary that changed on disk between the two reads is simply read as
//! it is at each pass. The randomness source is a parameter: the binary
//! passes `rand::rng()`, tests pass a seeded generator.

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Pick one word of `word_length` visible characters uniformly at random
///
/// Returns `Ok(None)` when the file holds no line of the requested length;
/// the caller turns that into the no-word-of-requested-size terminal
/// condition, distinct from an open failure.
///
/// # Errors
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle::dictionary::pick_answer;
///
/// let answer = pick_answer("/usr/share/dict/words", 5, &mut rand::rng()).unwrap();
/// if let Some(word) = answer {
///     println!("playing for {word}");
/// }
/// ```
pub fn pick_answer<P, R>(path: P, word_length: usize, rng: &mut R) -> io::Result<Option<String>>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.strip_suffix('\r').unwrap_or(&line);
        if word.chars().count() == word_length {
            candidates.push(word.to_string());
        }
    }

    Ok(candidates.choose(rng).cloned())
}
