//! Hangman Solver
//!
//! Solves Hangman boards by repeatedly guessing the letter that occurs in the most
//! dictionary words still consistent with the board.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{Pattern, Word};
//! use hangman_solver::solver::solve;
//! use hangman_solver::wordlists::{WORDS, words_from_slice};
//!
//! let dictionary = words_from_slice(WORDS);
//! let target = Word::new("angle").unwrap();
//! let initial = Pattern::parse("a**le").unwrap();
//!
//! let result = solve(&target, &dictionary, Some(&initial)).unwrap();
//! println!("Solved {} in {} guesses", result.final_pattern, result.guesses);
//! ```

// Core domain types
pub mod core;

// Solving algorithm
pub mod solver;

// Dictionaries and test case files
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and CSV reports
pub mod output;

// Logger setup
pub mod logging;
