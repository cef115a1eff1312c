//! Bucketing candidates by the feedback a guess would earn

use crate::core::{Pattern, Word};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Candidates grouped by pattern, keys in ascending lexicographic order
pub type Partition = BTreeMap<Pattern, FxHashSet<Word>>;

/// Group every candidate under the pattern `guess` earns against it
///
/// Buckets are pairwise disjoint and their union is exactly `candidates`.
/// Iteration order of `candidates` does not affect the result.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::solver::partition;
///
/// let candidates = [
///     Word::new("apple").unwrap(),
///     Word::new("grape").unwrap(),
///     Word::new("paper").unwrap(),
/// ];
/// let guess = Word::new("apple").unwrap();
///
/// let buckets = partition(&guess, &candidates);
/// assert_eq!(buckets.len(), 3);
/// assert_eq!(buckets.values().map(|b| b.len()).sum::<usize>(), 3);
/// ```
pub fn partition<'a, I>(guess: &Word, candidates: I) -> Partition
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut buckets = Partition::new();

    for word in candidates {
        let pattern = Pattern::calculate(word, guess);
        buckets.entry(pattern).or_default().insert(word.clone());
    }

    buckets
}
