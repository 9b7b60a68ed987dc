//! CSV reports for batch runs

use crate::commands::{CaseResult, RunRecord};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io;
use std::path::Path;

#[derive(Serialize)]
struct CaseRow<'a> {
    pattern_initial: &'a str,
    word: &'a str,
    found: bool,
    guesses: usize,
    pattern_final: &'a str,
}

impl<'a> From<&'a CaseResult> for CaseRow<'a> {
    fn from(result: &'a CaseResult) -> Self {
        Self {
            pattern_initial: &result.initial_pattern,
            word: &result.word,
            found: result.found,
            guesses: result.guesses,
            pattern_final: &result.final_pattern,
        }
    }
}

#[derive(Serialize)]
struct RunRow<'a> {
    word: &'a str,
    found: bool,
    guesses: usize,
}

impl<'a> From<&'a RunRecord> for RunRow<'a> {
    fn from(record: &'a RunRecord) -> Self {
        Self {
            word: &record.word,
            found: record.found,
            guesses: record.guesses,
        }
    }
}

/// Write test case results as CSV to any writer
///
/// # Errors
///
/// Returns an error if a row cannot be written.
pub fn write_case_csv<W: io::Write>(writer: W, results: &[CaseResult]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for result in results {
        csv.serialize(CaseRow::from(result))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write simulation records as CSV to any writer
///
/// # Errors
///
/// Returns an error if a row cannot be written.
pub fn write_simulation_csv<W: io::Write>(writer: W, records: &[RunRecord]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for record in records {
        csv.serialize(RunRow::from(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Save test case results to `path`
///
/// Columns: `pattern_initial,word,found,guesses,pattern_final`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_case_results<P: AsRef<Path>>(path: P, results: &[CaseResult]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("could not create {}", path.display()))?;
    write_case_csv(file, results).with_context(|| format!("could not write {}", path.display()))?;
    log::debug!("Wrote {} rows to {}", results.len(), path.display());
    Ok(())
}

/// Save simulation records to `path`
///
/// Columns: `word,found,guesses`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_simulation_results<P: AsRef<Path>>(path: P, records: &[RunRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("could not create {}", path.display()))?;
    write_simulation_csv(file, records)
        .with_context(|| format!("could not write {}", path.display()))?;
    log::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
