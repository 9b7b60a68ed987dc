//! Formatting utilities for terminal output

use crate::core::{Pattern, WILDCARD};
use colored::Colorize;

/// Format a board with revealed letters highlighted and wildcards dimmed
#[must_use]
pub fn colored_pattern(pattern: &Pattern) -> String {
    pattern
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(c) => c.to_uppercase().to_string().bright_green().bold().to_string(),
            None => WILDCARD.to_string().bright_black().to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Letters in guess order, e.g. `E A R (3)`
#[must_use]
pub fn letter_sequence(letters: impl IntoIterator<Item = char>) -> String {
    let letters: Vec<String> = letters
        .into_iter()
        .map(|c| c.to_uppercase().to_string())
        .collect();
    format!("{} ({})", letters.join(" "), letters.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_pattern_keeps_letters_and_wildcards() {
        colored::control::set_override(false);
        let pattern = Pattern::parse("a**le").unwrap();
        assert_eq!(colored_pattern(&pattern), "A**LE");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn letter_sequence_uppercases_in_order() {
        assert_eq!(letter_sequence("ng".chars()), "N G (2)");
        assert_eq!(letter_sequence(std::iter::empty()), " (0)");
    }
}
