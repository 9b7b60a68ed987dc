//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Pattern, Word};
use crate::solver::{FrequencyStrategy, SolveResult, Solver, TieBreak};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub pattern: Option<String>,
    pub tie_break: TieBreak,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            pattern: None,
            tie_break: TieBreak::FirstSeen,
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// Solve a specific word against the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or contains non-letters)
/// - The pattern cannot be parsed
/// - The pattern length differs from the target length
/// - The pattern reveals a letter the target does not have there
pub fn solve_word(config: SolveConfig, dictionary: &[Word]) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    let pattern = config
        .pattern
        .as_deref()
        .map(|p| Pattern::parse(p).with_context(|| format!("Invalid pattern '{p}'")))
        .transpose()?;

    if let Some(p) = &pattern
        && p.len() != target.len()
    {
        bail!(
            "Pattern '{p}' has {} slots but '{target}' has {} letters",
            p.len(),
            target.len()
        );
    }

    let solver = Solver::new(FrequencyStrategy::new(config.tie_break), dictionary);
    Ok(solver.solve(&target, pattern.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS, words_from_slice};

    #[test]
    fn solve_word_succeeds() {
        let dictionary = words_from_slice(WORDS);
        let result = solve_word(SolveConfig::new("angle".to_string()), &dictionary).unwrap();

        assert!(result.success);
        assert_eq!(result.target, "angle");
        assert_eq!(result.final_pattern.to_string(), "angle");
        assert_eq!(result.guesses, result.steps.len());
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let dictionary = words_from_slice(WORDS);
        let result = solve_word(SolveConfig::new("robot".to_string()), &dictionary).unwrap();

        // The target is in the dictionary, so the candidate set never empties
        for window in result.steps.windows(2) {
            assert!(window[1].candidates <= window[0].candidates);
        }
        assert!(result.steps.iter().all(|s| s.candidates >= 1 && !s.fallback));
    }

    #[test]
    fn solve_with_initial_pattern() {
        let dictionary = words_from_slice(&["apple", "angle", "ankle"]);
        let config = SolveConfig::new("ANGLE".to_string()).with_pattern("a__le");

        let result = solve_word(config, &dictionary).unwrap();
        assert_eq!(result.guesses, 2);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let result = solve_word(SolveConfig::new("an gle".to_string()), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn solve_pattern_length_mismatch_returns_error() {
        let config = SolveConfig::new("angle".to_string()).with_pattern("a*le");
        let err = solve_word(config, &[]).unwrap_err();
        assert!(err.to_string().contains("4 slots"));
    }

    #[test]
    fn solve_conflicting_pattern_returns_error() {
        let config = SolveConfig::new("angle".to_string()).with_pattern("o**le");
        assert!(solve_word(config, &[]).is_err());
    }
}
