//! Adversarial pattern selection
//!
//! The adversary keeps whichever feedback leaves the most words alive.

use super::partition::Partition;
use crate::core::Pattern;

/// Pick the pattern whose bucket is largest
///
/// Ties go to the lexicographically smallest pattern: keys are scanned in
/// ascending order and the incumbent is only replaced on a strict increase.
/// Returns `None` for an empty partition.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::solver::{partition, select_worst_pattern};
///
/// let candidates = [
///     Word::new("apple").unwrap(),
///     Word::new("grape").unwrap(),
///     Word::new("paper").unwrap(),
/// ];
/// let buckets = partition(&Word::new("apple").unwrap(), &candidates);
///
/// let worst = select_worst_pattern(&buckets).unwrap();
/// assert_eq!(worst.to_string(), "11002");
/// ```
#[must_use]
pub fn select_worst_pattern(partition: &Partition) -> Option<Pattern> {
    let mut best: Option<(Pattern, usize)> = None;

    for (pattern, bucket) in partition {
        if best.is_none_or(|(_, size)| bucket.len() > size) {
            best = Some((*pattern, bucket.len()));
        }
    }

    best.map(|(pattern, _)| pattern)
}
