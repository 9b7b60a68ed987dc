//! Main Hangman solver interface

use super::filter::filter_candidates;
use super::strategy::{FrequencyStrategy, Strategy};
use crate::core::{Pattern, TriedLetters, Word};
use std::fmt;

/// Main Hangman solver
///
/// Coordinates the filter/select/reveal loop over a borrowed dictionary.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    dictionary: &'a [Word],
    exclude_target: bool,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    pub guesses: usize,
    pub final_pattern: Pattern,
    pub steps: Vec<GuessStep>,
}

/// A single round of the solve loop
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub letter: char,
    /// Size of the candidate set the letter was chosen from
    pub candidates: usize,
    /// Slots opened by this guess (zero for a miss)
    pub revealed: usize,
    /// Letter came from the target itself because the candidates had nothing left
    pub fallback: bool,
    /// Board after the reveal
    pub pattern: Pattern,
}

/// Invalid input handed to the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    LengthMismatch { pattern: usize, word: usize },
    PatternConflict { position: usize },
    Stalled { pattern: String },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { pattern, word } => write!(
                f,
                "Pattern has {pattern} slots but the word has {word} letters"
            ),
            Self::PatternConflict { position } => write!(
                f,
                "Pattern reveals a different letter than the word at position {position}"
            ),
            Self::Stalled { pattern } => {
                write!(f, "No untried letter left while board is {pattern}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and dictionary
    pub const fn new(strategy: S, dictionary: &'a [Word]) -> Self {
        Self {
            strategy,
            dictionary,
            exclude_target: false,
        }
    }

    /// Leave the target word out of every candidate set
    ///
    /// Equivalent to solving against the dictionary with the target removed.
    #[must_use]
    pub fn excluding_target(mut self) -> Self {
        self.exclude_target = true;
        self
    }

    /// Candidates for the current board
    #[must_use]
    pub fn candidates(
        &self,
        pattern: &Pattern,
        tried: &TriedLetters,
        target: &Word,
    ) -> Vec<&'a Word> {
        let mut candidates = filter_candidates(pattern, self.dictionary, tried);
        if self.exclude_target {
            candidates.retain(|&word| word != target);
        }
        candidates
    }

    /// Guess letters until `target` is fully revealed
    ///
    /// Starts from `initial` when given, otherwise from an all-wildcard board.
    /// Letters revealed on the initial board count as tried, and all their
    /// occurrences in the target are opened before the first guess.
    ///
    /// # Errors
    ///
    /// Returns `SolveError` if the initial pattern has a different length than
    /// the target or reveals a letter the target does not have at that slot.
    pub fn solve(
        &self,
        target: &Word,
        initial: Option<&Pattern>,
    ) -> Result<SolveResult, SolveError> {
        let mut pattern = match initial {
            Some(p) if p.len() != target.len() => {
                return Err(SolveError::LengthMismatch {
                    pattern: p.len(),
                    word: target.len(),
                });
            }
            Some(p) => {
                if let Some(position) = p.conflicts_with(target) {
                    return Err(SolveError::PatternConflict { position });
                }
                p.clone()
            }
            None => Pattern::wildcard(target.len()),
        };

        let mut tried: TriedLetters = pattern.revealed_letters().collect();
        for letter in tried.iter() {
            pattern.reveal(target, letter);
        }

        let mut steps: Vec<GuessStep> = Vec::new();

        while !pattern.is_solved() {
            let candidates = self.candidates(&pattern, &tried, target);
            log::trace!("{target}: {} candidates for {pattern}", candidates.len());

            let (letter, fallback) = match self
                .strategy
                .select_letter(&candidates, &tried)
                .filter(|&letter| !tried.contains(letter))
            {
                Some(letter) => (letter, false),
                None => {
                    // Every tried letter is fully revealed, so any untried letter
                    // of the target sits behind a wildcard
                    let Some(letter) = target
                        .letters()
                        .iter()
                        .copied()
                        .find(|&c| !tried.contains(c))
                    else {
                        return Err(SolveError::Stalled {
                            pattern: pattern.to_string(),
                        });
                    };
                    (letter, true)
                }
            };

            tried.insert(letter);
            let revealed = pattern.reveal(target, letter);
            log::debug!(
                "{target}: guess {} '{letter}' -> {pattern}{}",
                steps.len() + 1,
                if fallback { " (fallback)" } else { "" }
            );

            steps.push(GuessStep {
                letter,
                candidates: candidates.len(),
                revealed,
                fallback,
                pattern: pattern.clone(),
            });
        }

        Ok(SolveResult {
            target: target.text().to_string(),
            success: pattern.is_solved(),
            guesses: steps.len(),
            final_pattern: pattern,
            steps,
        })
    }
}

/// Solve `target` against `dictionary` with the default frequency strategy
///
/// # Errors
///
/// Same conditions as [`Solver::solve`].
///
/// # Examples
/// ```
/// use hangman_solver::core::{Pattern, Word};
/// use hangman_solver::solver::solve;
///
/// let dictionary: Vec<Word> = ["apple", "angle", "ankle"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let target = Word::new("angle").unwrap();
/// let initial = Pattern::parse("a**le").unwrap();
///
/// let result = solve(&target, &dictionary, Some(&initial)).unwrap();
/// assert!(result.success);
/// assert_eq!(result.guesses, 2);
/// assert_eq!(result.final_pattern.to_string(), "angle");
/// ```
pub fn solve(
    target: &Word,
    dictionary: &[Word],
    initial: Option<&Pattern>,
) -> Result<SolveResult, SolveError> {
    Solver::new(FrequencyStrategy::default(), dictionary).solve(target, initial)
}
