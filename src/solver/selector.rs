//! Letter frequency selection
//!
//! Picks the untried letter that occurs in the most candidate words.

use crate::core::{TriedLetters, Word};
use rustc_hash::FxHashMap;

/// How to choose between letters with the same count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Letter encountered first while scanning candidates in order
    #[default]
    FirstSeen,
    /// Smallest letter by Unicode scalar value
    Alphabetical,
}

/// Per-letter document frequency over a candidate set
///
/// Each word votes at most once per letter. Letters keep the order in which they
/// were first encountered (word order, then position inside the word).
#[derive(Debug, Clone, Default)]
pub struct LetterCounts {
    counts: Vec<(char, usize)>,
    index: FxHashMap<char, usize>,
}

impl LetterCounts {
    fn add(&mut self, letter: char) {
        if let Some(&i) = self.index.get(&letter) {
            self.counts[i].1 += 1;
        } else {
            self.index.insert(letter, self.counts.len());
            self.counts.push((letter, 1));
        }
    }

    /// Count for a letter, zero if never seen
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.index.get(&letter).map_or(0, |&i| self.counts[i].1)
    }

    /// `(letter, count)` pairs in first-seen order
    #[must_use]
    pub fn as_slice(&self) -> &[(char, usize)] {
        &self.counts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Letter with the highest count, ties resolved by `tie_break`
    #[must_use]
    pub fn most_common(&self, tie_break: TieBreak) -> Option<char> {
        let mut best: Option<(char, usize)> = None;
        for &(letter, count) in &self.counts {
            let better = match best {
                None => true,
                Some((best_letter, best_count)) => {
                    count > best_count
                        || (count == best_count
                            && tie_break == TieBreak::Alphabetical
                            && letter < best_letter)
                }
            };
            if better {
                best = Some((letter, count));
            }
        }
        best.map(|(letter, _)| letter)
    }
}

/// Count untried letters across candidates, one vote per word per letter
#[must_use]
pub fn letter_frequencies(candidates: &[&Word], tried: &TriedLetters) -> LetterCounts {
    let mut counts = LetterCounts::default();
    for word in candidates {
        for letter in word.distinct_letters() {
            if !tried.contains(letter) {
                counts.add(letter);
            }
        }
    }
    counts
}

/// Select the next letter to guess
///
/// Returns `None` when there are no candidates or every candidate letter has
/// already been tried.
///
/// # Examples
/// ```
/// use hangman_solver::core::{TriedLetters, Word};
/// use hangman_solver::solver::{TieBreak, select_letter};
///
/// let words = [Word::new("angle").unwrap(), Word::new("ankle").unwrap()];
/// let candidates: Vec<&Word> = words.iter().collect();
/// let tried: TriedLetters = "ale".chars().collect();
///
/// assert_eq!(select_letter(&candidates, &tried, TieBreak::FirstSeen), Some('n'));
/// ```
#[must_use]
pub fn select_letter(
    candidates: &[&Word],
    tried: &TriedLetters,
    tie_break: TieBreak,
) -> Option<char> {
    letter_frequencies(candidates, tried).most_common(tie_break)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn repeated_letters_vote_once_per_word() {
        let dict = words(&["banana", "bread"]);
        let candidates: Vec<&Word> = dict.iter().collect();

        let counts = letter_frequencies(&candidates, &TriedLetters::new());
        assert_eq!(counts.get('a'), 2);
        assert_eq!(counts.get('n'), 1);
        assert_eq!(counts.get('b'), 2);
        assert_eq!(counts.get('z'), 0);
    }

    #[test]
    fn tried_letters_are_not_counted() {
        let dict = words(&["angle", "ankle"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let tried: TriedLetters = "ale".chars().collect();

        let counts = letter_frequencies(&candidates, &tried);
        assert_eq!(counts.as_slice(), &[('n', 2), ('g', 1), ('k', 1)]);
    }

    #[test]
    fn picks_highest_count() {
        let dict = words(&["apple", "angle", "ankle"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let tried: TriedLetters = "ale".chars().collect();

        assert_eq!(
            select_letter(&candidates, &tried, TieBreak::FirstSeen),
            Some('n')
        );
    }

    #[test]
    fn tie_break_first_seen_follows_candidate_order() {
        let dict = words(&["angle", "ankle"]);
        let tried: TriedLetters = "anle".chars().collect();

        let forward: Vec<&Word> = dict.iter().collect();
        let backward: Vec<&Word> = dict.iter().rev().collect();

        assert_eq!(select_letter(&forward, &tried, TieBreak::FirstSeen), Some('g'));
        assert_eq!(select_letter(&backward, &tried, TieBreak::FirstSeen), Some('k'));
    }

    #[test]
    fn tie_break_alphabetical_ignores_order() {
        let dict = words(&["ankle", "angle"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let tried: TriedLetters = "anle".chars().collect();

        assert_eq!(
            select_letter(&candidates, &tried, TieBreak::Alphabetical),
            Some('g')
        );
    }

    #[test]
    fn none_when_no_candidates() {
        assert_eq!(
            select_letter(&[], &TriedLetters::new(), TieBreak::FirstSeen),
            None
        );
    }

    #[test]
    fn none_when_all_letters_tried() {
        let dict = words(&["noon"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let tried: TriedLetters = "no".chars().collect();

        assert_eq!(select_letter(&candidates, &tried, TieBreak::FirstSeen), None);
    }

    #[test]
    fn selection_is_deterministic() {
        let dict = words(&["stone", "notes", "onset", "tones", "steno"]);
        let candidates: Vec<&Word> = dict.iter().collect();
        let tried: TriedLetters = ['e'].into_iter().collect();

        let first = select_letter(&candidates, &tried, TieBreak::FirstSeen);
        for _ in 0..10 {
            assert_eq!(select_letter(&candidates, &tried, TieBreak::FirstSeen), first);
        }
        assert_eq!(first, Some('s'));
    }
}
