//! Per-position feedback for a non-winning guess
//!
//! A hint marks each position as one of:
//! - an uppercase letter: correct letter in the correct position,
//! - a lowercase letter: the letter appears elsewhere in the answer,
//! - `-`: the letter is absent (or already fully credited).
//!
//! The wrong-position pass walks the answer's open positions in order and
//! credits each answer letter to at most one open guess position, so
//! duplicate letters are never double-counted in either direction.

use std::fmt;

/// Feedback for one guess against one answer
///
/// Recomputed from scratch for every guess; nothing carries over between
/// rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    cells: Vec<char>,
}

impl Hint {
    /// Compute the hint for `guess` against `answer`
    ///
    /// Comparisons are case-insensitive; the marks take their letter (and
    /// case discipline) from the answer. Both inputs are expected to have
    /// the same visible length; positions the guess does not cover simply
    /// never match.
    ///
    /// # Algorithm
    /// 1. Exact pass: equal letters at equal positions become uppercase.
    /// 2. The positions still `-` are collected as the open positions.
    /// 3. Wrong-position pass: for each open answer position in increasing
    ///    order, the first open, still-unmarked guess position holding that
    ///    letter is set to the lowercase letter. Each answer occurrence
    ///    credits at most one guess position.
    ///
    /// # Examples
    /// ```
    /// use wordle::core::Hint;
    ///
    /// let hint = Hint::compute("boost", "robot");
    /// assert_eq!(hint.to_string(), "bOo-T");
    ///
    /// // Only one 'a' in the answer beyond the exact match, so no
    /// // wrong-position credit remains for the other four.
    /// let hint = Hint::compute("aaaaa", "apple");
    /// assert_eq!(hint.to_string(), "A----");
    /// ```
    #[must_use]
    pub fn compute(guess: &str, answer: &str) -> Self {
        let guess: Vec<char> = guess.chars().collect();
        let answer: Vec<char> = answer.chars().collect();
        let mut cells = vec!['-'; answer.len()];

        // Exact pass
        for (i, &a) in answer.iter().enumerate() {
            if guess.get(i).is_some_and(|&g| letters_match(g, a)) {
                cells[i] = a.to_ascii_uppercase();
            }
        }

        let open: Vec<usize> = (0..answer.len()).filter(|&i| cells[i] == '-').collect();

        // Wrong-position pass over the open positions only
        for &p in &open {
            let wanted = answer[p];
            for &z in &open {
                if cells[z] == '-' && guess.get(z).is_some_and(|&g| letters_match(g, wanted)) {
                    cells[z] = wanted.to_ascii_lowercase();
                    break;
                }
            }
        }

        Self { cells }
    }

    /// The hint as a sequence of cells
    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.cells {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

fn letters_match(a: char, b: char) -> bool {
    a.to_ascii_lowercase() == b.to_ascii_lowercase()
}
