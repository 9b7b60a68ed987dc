//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable.

mod pattern;
mod tried;
mod word;

pub use pattern::{Pattern, PatternError, WILDCARD, is_wildcard};
pub use tried::TriedLetters;
pub use word::{Word, WordError, is_word_letter};
