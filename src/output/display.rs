//! Display functions for command results

use super::formatters::{colored_pattern, create_progress_bar, letter_sequence};
use crate::commands::{CaseResult, SimulationSummary};
use crate::solver::SolveResult;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        let outcome = if step.revealed > 0 {
            format!("+{}", step.revealed).green()
        } else {
            "miss".red()
        };
        println!(
            "\nGuess {turn}: {}  {}  {outcome}",
            step.letter.to_uppercase().to_string().bold(),
            colored_pattern(&step.pattern),
        );

        if verbose {
            println!("  Candidates: {}", step.candidates);
            if step.fallback {
                println!("  {}", "No candidate letter left, took one from the word".yellow());
            }
        }
    }

    println!();
    println!(
        "Letters:  {}",
        letter_sequence(result.steps.iter().map(|s| s.letter))
    );
    println!(
        "{}",
        format!(
            "✅ Solved in {} guess{}!",
            result.guesses,
            if result.guesses == 1 { "" } else { "es" }
        )
        .green()
        .bold()
    );
}

/// Print one line per test case
pub fn print_case_result(result: &CaseResult) {
    let found = if result.found {
        "true".green()
    } else {
        "false".red()
    };
    println!(
        "{:<20} | initial pattern: {} | found: {found} | guesses: {}",
        result.word.to_uppercase(),
        result.initial_pattern,
        result.guesses
    );
}

/// Print test case totals
pub fn print_case_summary(results: &[CaseResult]) {
    if results.is_empty() {
        println!("{}", "No test cases to run".yellow());
        return;
    }

    let solved = results.iter().filter(|r| r.found).count();
    let total_guesses: usize = results.iter().map(|r| r.guesses).sum();
    println!(
        "\n📊 {} of {} cases solved, {} guesses on average",
        solved,
        results.len(),
        format!("{:.2}", total_guesses as f64 / results.len() as f64).bright_yellow()
    );
}

/// Print the result of a simulation
pub fn print_simulation_summary(summary: &SimulationSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        format!("SIMULATION: {} RANDOM WORDS", summary.records.len())
            .bright_cyan()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", summary.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Success rate:     {}",
        format!("{:.2}%", summary.success_rate).green()
    );
    println!(
        "   Best case:        {}",
        format!("{}", summary.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", summary.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", summary.duration.as_secs_f64());

    if summary.records.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = summary.distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &summary.distribution {
        let pct = count as f64 / summary.records.len() as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
