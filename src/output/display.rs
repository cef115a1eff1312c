//! Display functions for command results

use super::formatters::{create_progress_bar, pattern_tiles};
use crate::commands::{AnalysisResult, HintResult};
use colored::Colorize;

/// Buckets listed before the remainder is summarized
const MAX_BUCKETS_SHOWN: usize = 15;

/// Print how a guess splits the dictionary
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ADVERSARY ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} words, {} distinct patterns:",
        result.total_candidates,
        result.buckets.len()
    );

    let largest = result.buckets.first().map_or(0, |(_, size)| *size) as f64;
    for (pattern, size) in result.buckets.iter().take(MAX_BUCKETS_SHOWN) {
        let bar = create_progress_bar(*size as f64, largest, 30);
        let marker = if *pattern == result.kept {
            "◀ kept".bright_red().bold().to_string()
        } else {
            String::new()
        };
        println!(
            "   {} {} {:>5} {}",
            pattern_tiles(&result.word, *pattern),
            bar.green(),
            size,
            marker
        );
    }

    if result.buckets.len() > MAX_BUCKETS_SHOWN {
        let rest: usize = result.buckets[MAX_BUCKETS_SHOWN..]
            .iter()
            .map(|(_, size)| size)
            .sum();
        println!(
            "   … {} more patterns holding {rest} words",
            result.buckets.len() - MAX_BUCKETS_SHOWN
        );
    }

    println!(
        "\n   The adversary answers {} and keeps {} words.",
        result.kept.to_string().bright_yellow().bold(),
        result.kept_size.to_string().bright_red().bold()
    );
}

/// Print a suggested guess
pub fn print_hint_result(result: &HintResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST GUESS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n💡 {}", result.word.bright_yellow().bold());
    println!(
        "   Worst case:  {} of {} words survive",
        result.worst_case.to_string().yellow(),
        result.candidates
    );
    if result.is_candidate {
        println!("   {}", "Could still be the answer".green());
    }
}
