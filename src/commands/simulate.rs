//! Random simulation command
//!
//! Solves a random sample of dictionary words from a blank board.

use crate::core::Word;
use crate::solver::{FrequencyStrategy, SolveError, Solver, TieBreak};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    /// Number of distinct words to sample
    pub count: usize,
    /// Fixed RNG seed for a reproducible sample
    pub seed: Option<u64>,
    /// Words that must not be sampled (e.g. the test file's words)
    pub exclude: FxHashSet<String>,
    pub tie_break: TieBreak,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            exclude: FxHashSet::default(),
            tie_break: TieBreak::FirstSeen,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Outcome of solving one sampled word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub word: String,
    pub found: bool,
    pub guesses: usize,
}

/// Aggregate of a simulation run
#[derive(Debug)]
pub struct SimulationSummary {
    pub records: Vec<RunRecord>,
    pub average_guesses: f64,
    /// Percentage of solved words (0-100)
    pub success_rate: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationSummary {
    fn from_records(records: Vec<RunRecord>, duration: Duration) -> Self {
        let total = records.len();
        let total_guesses: usize = records.iter().map(|r| r.guesses).sum();
        let solved = records.iter().filter(|r| r.found).count();

        let mut distribution = BTreeMap::new();
        for record in &records {
            *distribution.entry(record.guesses).or_insert(0) += 1;
        }

        let (average_guesses, success_rate) = if total > 0 {
            (
                total_guesses as f64 / total as f64,
                solved as f64 / total as f64 * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            min_guesses: records.iter().map(|r| r.guesses).min().unwrap_or(0),
            max_guesses: records.iter().map(|r| r.guesses).max().unwrap_or(0),
            records,
            average_guesses,
            success_rate,
            distribution,
            duration,
        }
    }
}

/// Pick `count` distinct words from `pool`
#[must_use]
pub fn sample_words<'a, R: Rng + ?Sized>(
    pool: &[&'a Word],
    count: usize,
    rng: &mut R,
) -> Vec<&'a Word> {
    pool.choose_multiple(rng, count).copied().collect()
}

/// Solve a random sample of words against the full dictionary
///
/// Runs are independent, so they are solved in parallel; records keep the
/// sample order.
///
/// # Errors
///
/// Returns an error if fewer than `config.count` words remain after exclusion.
pub fn run_simulation(dictionary: &[Word], config: &SimulationConfig) -> Result<SimulationSummary> {
    let pool: Vec<&Word> = dictionary
        .iter()
        .filter(|w| !config.exclude.contains(w.text()))
        .collect();

    if pool.len() < config.count {
        bail!(
            "Word list too small: {} words available, {} requested",
            pool.len(),
            config.count
        );
    }

    let sample = match config.seed {
        Some(seed) => sample_words(&pool, config.count, &mut StdRng::seed_from_u64(seed)),
        None => sample_words(&pool, config.count, &mut rand::rng()),
    };
    log::debug!("Sampled {} of {} words", sample.len(), pool.len());

    let solver = Solver::new(FrequencyStrategy::new(config.tie_break), dictionary);

    let pb = ProgressBar::new(sample.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let records = sample
        .par_iter()
        .map(|&word| {
            let result = solver.solve(word, None)?;
            pb.inc(1);
            Ok(RunRecord {
                word: result.target,
                found: result.success,
                guesses: result.guesses,
            })
        })
        .collect::<Result<Vec<_>, SolveError>>()?;
    pb.finish_and_clear();

    Ok(SimulationSummary::from_records(records, start.elapsed()))
}
