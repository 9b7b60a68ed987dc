//! Candidate filtering
//!
//! Narrows the dictionary to words consistent with the board and the guess history.

use crate::core::{Pattern, TriedLetters, Word};
use rustc_hash::FxHashSet;

/// Filter the dictionary to words consistent with `pattern` and `tried`
///
/// A word survives when it matches every revealed slot positionally and contains
/// none of the tried letters that are absent from the pattern. Tried letters that
/// are revealed may recur anywhere in the word. Dictionary order is preserved.
///
/// # Examples
/// ```
/// use hangman_solver::core::{Pattern, TriedLetters, Word};
/// use hangman_solver::solver::filter_candidates;
///
/// let dictionary: Vec<Word> = ["apple", "angle", "ankle", "eagle"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let pattern = Pattern::parse("a**le").unwrap();
/// let tried: TriedLetters = "alep".chars().collect();
///
/// let candidates = filter_candidates(&pattern, &dictionary, &tried);
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["angle", "ankle"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    pattern: &Pattern,
    dictionary: &'a [Word],
    tried: &TriedLetters,
) -> Vec<&'a Word> {
    let excluded: FxHashSet<char> = tried
        .iter()
        .filter(|&letter| !pattern.contains(letter))
        .collect();

    dictionary
        .iter()
        .filter(|word| pattern.matches(word))
        .filter(|word| !word.letters().iter().any(|c| excluded.contains(c)))
        .collect()
}
