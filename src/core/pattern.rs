//! Hangman board pattern
//!
//! A pattern is the positional view of the hidden word: each slot is either a
//! revealed letter or a wildcard. Both `*` and `_` parse as wildcards; `*` is
//! used when rendering.

use super::Word;
use super::word::is_word_letter;
use std::fmt;

/// Wildcard used when rendering a pattern
pub const WILDCARD: char = '*';

/// Whether a character marks an unknown slot
#[inline]
#[must_use]
pub const fn is_wildcard(c: char) -> bool {
    matches!(c, '*' | '_')
}

/// Partially revealed word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Option<char>>);

/// Error type for unparseable patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must have at least one slot"),
            Self::InvalidCharacter(c) => {
                write!(f, "Pattern contains invalid character '{c}' (use letters, '*' or '_')")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Fully hidden pattern of the given length
    #[must_use]
    pub fn wildcard(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// Parse a pattern such as `"a**le"` or `"a__le"`
    ///
    /// # Errors
    /// Returns `PatternError` if the string is empty or contains a character that is
    /// neither a letter, a hyphen, nor a wildcard.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let p1 = Pattern::parse("A**le").unwrap();
    /// let p2 = Pattern::parse("a_*le").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.to_string(), "a**le");
    /// assert_eq!(p1.wildcard_count(), 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let slots = s
            .to_lowercase()
            .chars()
            .map(|c| {
                if is_wildcard(c) {
                    Ok(None)
                } else if is_word_letter(c) {
                    Ok(Some(c))
                } else {
                    Err(PatternError::InvalidCharacter(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if slots.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self(slots))
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Slots in order, `None` for wildcards
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.0
    }

    /// True once no wildcard remains
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.len() - self.revealed_count()
    }

    /// Check if a letter is revealed anywhere in the pattern
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&Some(letter))
    }

    /// Revealed letters in slot order (repeats included)
    pub fn revealed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().filter_map(|&slot| slot)
    }

    /// Check positional consistency with a word
    ///
    /// Same length, and every revealed slot equals the word's letter there.
    /// Wildcards match any letter.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.len() == word.len()
            && self
                .0
                .iter()
                .zip(word.letters())
                .all(|(slot, &letter)| slot.is_none_or(|c| c == letter))
    }

    /// First position where a revealed slot disagrees with `word`
    ///
    /// Assumes equal lengths; extra slots on either side are ignored.
    #[must_use]
    pub fn conflicts_with(&self, word: &Word) -> Option<usize> {
        self.0
            .iter()
            .zip(word.letters())
            .position(|(slot, &letter)| slot.is_some_and(|c| c != letter))
    }

    /// Open every wildcard where `word` has `letter`
    ///
    /// Returns the number of newly revealed slots. A letter absent from the word
    /// leaves the pattern untouched.
    pub fn reveal(&mut self, word: &Word, letter: char) -> usize {
        let mut revealed = 0;
        for (slot, &actual) in self.0.iter_mut().zip(word.letters()) {
            if slot.is_none() && actual == letter {
                *slot = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            write!(f, "{}", slot.unwrap_or(WILDCARD))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn wildcard_pattern_is_fully_hidden() {
        let pattern = Pattern::wildcard(4);
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.revealed_count(), 0);
        assert!(!pattern.is_solved());
        assert_eq!(pattern.to_string(), "****");
    }

    #[test]
    fn parse_treats_both_wildcards_alike() {
        let pattern = Pattern::parse("_n*l_").unwrap();
        assert_eq!(pattern.slots(), &[None, Some('n'), None, Some('l'), None]);
        assert_eq!(pattern.to_string(), "*n*l*");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(Pattern::parse("a?le"), Err(PatternError::InvalidCharacter('?')));
        assert_eq!(Pattern::parse("a le"), Err(PatternError::InvalidCharacter(' ')));
    }

    #[test]
    fn parse_accepts_diacritics() {
        let pattern = Pattern::parse("Ș**ț*").unwrap();
        assert!(pattern.contains('ș'));
        assert!(pattern.contains('ț'));
        assert_eq!(pattern.len(), 5);
    }

    #[test]
    fn matches_positional_rule() {
        let pattern = Pattern::parse("a**le").unwrap();
        assert!(pattern.matches(&word("angle")));
        assert!(pattern.matches(&word("ankle")));
        assert!(pattern.matches(&word("apple")));
        assert!(!pattern.matches(&word("eagle")));
        assert!(!pattern.matches(&word("angles")));
        assert!(!pattern.matches(&word("able")));
    }

    #[test]
    fn reveal_opens_every_occurrence() {
        let target = word("banana");
        let mut pattern = Pattern::wildcard(6);

        assert_eq!(pattern.reveal(&target, 'a'), 3);
        assert_eq!(pattern.to_string(), "*a*a*a");

        assert_eq!(pattern.reveal(&target, 'z'), 0);
        assert_eq!(pattern.to_string(), "*a*a*a");

        // Already revealed slots are not counted again
        assert_eq!(pattern.reveal(&target, 'a'), 0);
    }

    #[test]
    fn solved_after_all_letters_revealed() {
        let target = word("noon");
        let mut pattern = Pattern::wildcard(4);
        pattern.reveal(&target, 'n');
        assert!(!pattern.is_solved());
        pattern.reveal(&target, 'o');
        assert!(pattern.is_solved());
        assert_eq!(pattern.to_string(), "noon");
    }

    #[test]
    fn conflicts_with_reports_first_disagreement() {
        let pattern = Pattern::parse("a*x*e").unwrap();
        assert_eq!(pattern.conflicts_with(&word("angle")), Some(2));
        assert_eq!(Pattern::parse("a**le").unwrap().conflicts_with(&word("angle")), None);
    }

    #[test]
    fn revealed_letters_in_slot_order() {
        let pattern = Pattern::parse("e*e*a").unwrap();
        let letters: Vec<char> = pattern.revealed_letters().collect();
        assert_eq!(letters, vec!['e', 'e', 'a']);
    }

    #[test]
    fn from_str_round_trips_display() {
        let pattern: Pattern = "*ră*".parse().unwrap();
        assert_eq!(pattern.to_string(), "*ră*");
    }
}
