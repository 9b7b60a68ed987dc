//! Letters guessed during a single solve

use rustc_hash::FxHashSet;

/// Set of letters already tried, with the order they were guessed in
///
/// Grows monotonically: there is no removal.
#[derive(Debug, Clone, Default)]
pub struct TriedLetters {
    set: FxHashSet<char>,
    order: Vec<char>,
}

impl TriedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter
    ///
    /// Returns `false` if it had already been tried.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.set.insert(letter) {
            self.order.push(letter);
            true
        } else {
            false
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.set.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Letters in the order they were first tried
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }
}

impl FromIterator<char> for TriedLetters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut tried = Self::new();
        for letter in iter {
            tried.insert(letter);
        }
        tried
    }
}
