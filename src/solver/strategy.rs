//! Letter selection strategies
//!
//! Defines the Strategy trait and the frequency-based implementation.

use super::selector::{TieBreak, select_letter};
use crate::core::{TriedLetters, Word};

/// A strategy for choosing the next letter from the current candidates
pub trait Strategy {
    /// Select the next letter to guess
    ///
    /// Returns `None` when the candidates offer no untried letter.
    fn select_letter(&self, candidates: &[&Word], tried: &TriedLetters) -> Option<char>;
}

/// Most-frequent-letter strategy
///
/// Counts, for each untried letter, how many candidates contain it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy {
    pub tie_break: TieBreak,
}

impl FrequencyStrategy {
    #[must_use]
    pub const fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, candidates: &[&Word], tried: &TriedLetters) -> Option<char> {
        select_letter(candidates, tried, self.tie_break)
    }
}
