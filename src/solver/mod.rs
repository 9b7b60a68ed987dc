//! Hangman solving algorithms
//!
//! Candidate filtering, letter selection and the solve loop that combines them.

mod engine;
pub mod filter;
pub mod selector;
pub mod strategy;

pub use engine::{GuessStep, SolveError, SolveResult, Solver, solve};
pub use filter::filter_candidates;
pub use selector::{LetterCounts, TieBreak, letter_frequencies, select_letter};
pub use strategy::{FrequencyStrategy, Strategy};
