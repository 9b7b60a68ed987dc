//! Test case files
//!
//! Each line is `id;pattern;word`, extra fields ignored. Lines with fewer than
//! three fields are skipped silently; malformed entries are skipped with a warning.

use crate::core::{Pattern, Word};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// A word to solve starting from a given board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub id: String,
    pub pattern: Pattern,
    pub word: Word,
}

/// Load test cases from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or opened.
pub fn load_test_cases<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("test file {} could not be read", path.display()))?;

    let cases = parse_test_cases(&content);
    log::info!("{} test cases loaded from {}", cases.len(), path.display());
    Ok(cases)
}

/// Parse test case text
#[must_use]
pub fn parse_test_cases(content: &str) -> Vec<TestCase> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<TestCase> {
    let line = line.trim();
    let mut fields = line.split(';');
    let (Some(id), Some(pattern), Some(word)) = (fields.next(), fields.next(), fields.next())
    else {
        return None;
    };

    let pattern = match Pattern::parse(pattern.trim()) {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("Skipping '{line}': {e}");
            return None;
        }
    };
    let word = match Word::new(word.trim()) {
        Ok(word) => word,
        Err(e) => {
            log::warn!("Skipping '{line}': {e}");
            return None;
        }
    };

    if pattern.len() != word.len() {
        log::warn!("Skipping '{line}': pattern and word differ in length");
        return None;
    }

    Some(TestCase {
        id: id.trim().to_string(),
        pattern,
        word,
    })
}
