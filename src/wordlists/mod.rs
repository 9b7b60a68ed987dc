//! Word lists for Hangman solving
//!
//! Provides the embedded dictionary plus loaders for dictionary and test case files.

pub mod cases;
mod embedded;
pub mod loader;

pub use cases::{TestCase, load_test_cases};
pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{load_dictionary, words_from_slice};
