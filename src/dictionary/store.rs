//! Dictionary loading and membership queries
//!
//! A dictionary is loaded once per game and filtered to the configured word
//! length at load time. Entries keep their original file case and order; a
//! lowercased index answers case-insensitive membership tests.

use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// The words of the configured length from one dictionary file
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    lowercased: FxHashSet<String>,
}

impl Dictionary {
    /// Load a dictionary, keeping only lines of the configured visible length
    ///
    /// Line terminators are not part of the visible length. No alphabetic
    /// filtering is applied: any line of the right length is a word. An
    /// empty result is not an error at this layer.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be opened or read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::load("/usr/share/dict/words", 5).unwrap();
    /// println!("{} five-letter words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.strip_suffix('\r').unwrap_or(&line);
            if word.chars().count() == word_length {
                words.push(word.to_string());
            }
        }

        Ok(Self::from_words(words))
    }

    /// Build a dictionary from words already in memory
    ///
    /// The caller is responsible for the words being the right length; no
    /// filtering happens here.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let lowercased = words.iter().map(|w| w.to_lowercase()).collect();

        Self { words, lowercased }
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.lowercased.contains(&candidate.to_lowercase())
    }

    /// Number of words retained
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no line of the configured length was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The retained words, in file order and original case
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
