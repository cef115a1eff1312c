//! Worst-case calculation against the adversary
//!
//! Given a guess and set of candidates, computes how many candidates the
//! adversary would leave alive.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Size of the bucket the adversary keeps after `guess`
///
/// The adversary always keeps the largest bucket, so this is also the
/// worst case a player faces for the guess.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::solver::minimax::worst_case;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("plate").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// assert_eq!(worst_case(&guess, &candidate_refs), 2);
/// ```
#[must_use]
pub fn worst_case(guess: &Word, candidates: &[&Word]) -> usize {
    group_by_pattern(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(candidate, guess);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}
