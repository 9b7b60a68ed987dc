//! Hangman word representation
//!
//! A Word stores a normalized dictionary entry along with its letters for positional access.

use rustc_hash::FxHashSet;
use std::fmt;

/// A lowercase dictionary word
///
/// Letters are any Unicode alphabetic character (diacritics included) or a hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word contains invalid character '{c}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Whether a character counts as a letter of a word
#[inline]
#[must_use]
pub fn is_word_letter(c: char) -> bool {
    c.is_alphabetic() || c == '-'
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - It contains anything other than letters or hyphens
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("Știință").unwrap();
    /// assert_eq!(word.text(), "știință");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("n0pe").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|&c| !is_word_letter(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters in order of first occurrence
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut seen = FxHashSet::default();
        self.letters
            .iter()
            .copied()
            .filter(|&c| seen.insert(c))
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
