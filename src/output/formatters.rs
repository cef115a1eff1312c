//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Feedback::Exact => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.black().on_white(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn pattern_tiles(guess: &str, pattern: Pattern) -> String {
    guess
        .chars()
        .zip(pattern.feedback())
        .map(|(letter, &feedback)| tile(letter, feedback).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_tiles_keeps_letters_in_order() {
        colored::control::set_override(false);
        let pattern: Pattern = "21000".parse().unwrap();
        assert_eq!(pattern_tiles("CRANE", pattern), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
