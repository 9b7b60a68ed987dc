//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or use embedded constants.

use crate::core::Word;
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// Returns the valid words in file order, lowercased and without duplicates.
/// Blank lines and lines with anything other than letters or hyphens are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_dictionary;
///
/// let words = load_dictionary("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("dictionary {} could not be read", path.display()))?;

    let words = parse_dictionary(&content);
    log::info!("{} words loaded from {}", words.len(), path.display());
    Ok(words)
}

/// Parse dictionary text, one word per line
#[must_use]
pub fn parse_dictionary(content: &str) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();

    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["angle", "ankle", "apple"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "angle");
        assert_eq!(words[2].text(), "apple");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["angle", "an gle", "4nkle", "apple"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "apple");
    }

    #[test]
    fn parse_dictionary_normalizes_and_filters() {
        let content = "  Angle \n\nankle\nhello world\nbună-ziua\nx1\nMĂR\n";
        let words = parse_dictionary(content);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, ["angle", "ankle", "bună-ziua", "măr"]);
    }

    #[test]
    fn parse_dictionary_drops_duplicates_keeping_first() {
        let content = "cat\ndog\nCAT\ncat\nbird\n";
        let words = parse_dictionary(content);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, ["cat", "dog", "bird"]);
    }

    #[test]
    fn load_dictionary_missing_file_names_path() {
        let err = load_dictionary("definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
