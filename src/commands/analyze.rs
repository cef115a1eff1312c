//! Word analysis command
//!
//! Shows how a guess splits the dictionary and which bucket the adversary keeps.

use crate::core::{GameError, Pattern, Word};
use crate::game::Dictionary;
use crate::solver::{partition, select_worst_pattern};
use std::cmp::Reverse;

/// Result of analyzing an opening guess
pub struct AnalysisResult {
    pub word: String,
    pub total_candidates: usize,
    /// Buckets largest first, ties in ascending pattern order
    pub buckets: Vec<(Pattern, usize)>,
    pub kept: Pattern,
    pub kept_size: usize,
}

/// Analyze how `word` splits the whole dictionary
///
/// # Errors
///
/// Returns the same validation errors a guess would: invalid length,
/// non-alphabetic characters, or a word missing from the dictionary.
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult, GameError> {
    let guess = Word::new(word)?;
    if !dictionary.contains(&guess) {
        return Err(GameError::UnknownWord(guess.text().to_string()));
    }

    let split = partition(&guess, dictionary.iter());
    let kept = select_worst_pattern(&split).ok_or(GameError::NoCandidates)?;

    let mut buckets: Vec<(Pattern, usize)> = split
        .iter()
        .map(|(pattern, bucket)| (*pattern, bucket.len()))
        .collect();
    // Stable sort keeps ascending pattern order among equal sizes
    buckets.sort_by_key(|&(_, size)| Reverse(size));

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        total_candidates: dictionary.len(),
        kept_size: split[&kept].len(),
        kept,
        buckets,
    })
}
