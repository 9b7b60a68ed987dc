//! Test file command
//!
//! Solves every case from a test file with the real word removed from the pool.

use crate::core::Word;
use crate::solver::{FrequencyStrategy, Solver, TieBreak};
use crate::wordlists::TestCase;
use indicatif::{ProgressBar, ProgressStyle};

/// Outcome of one test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub initial_pattern: String,
    pub word: String,
    pub found: bool,
    pub guesses: usize,
    pub final_pattern: String,
}

/// Run every test case against `dictionary`, excluding each case's own word
///
/// A case the solver rejects (its pattern reveals a letter the word does not
/// have) is reported as not found with zero guesses.
pub fn run_test_cases(
    cases: &[TestCase],
    dictionary: &[Word],
    tie_break: TieBreak,
) -> Vec<CaseResult> {
    let solver = Solver::new(FrequencyStrategy::new(tie_break), dictionary).excluding_target();

    let pb = ProgressBar::new(cases.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let results = cases
        .iter()
        .map(|case| {
            let result = match solver.solve(&case.word, Some(&case.pattern)) {
                Ok(solved) => CaseResult {
                    initial_pattern: case.pattern.to_string(),
                    word: solved.target,
                    found: solved.success,
                    guesses: solved.guesses,
                    final_pattern: solved.final_pattern.to_string(),
                },
                Err(e) => {
                    log::warn!("Case {} ({}): {e}", case.id, case.word);
                    CaseResult {
                        initial_pattern: case.pattern.to_string(),
                        word: case.word.text().to_string(),
                        found: false,
                        guesses: 0,
                        final_pattern: case.pattern.to_string(),
                    }
                }
            };
            pb.set_message(result.word.clone());
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    results
}
