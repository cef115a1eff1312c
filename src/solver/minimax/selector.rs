//! Hint selection: the guess that gives the adversary the least room

use super::calculator::worst_case;
use crate::core::Word;
use rayon::prelude::*;

/// A suggested guess and the bucket size the adversary would keep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint<'a> {
    pub word: &'a Word,
    pub worst_case: usize,
    pub is_candidate: bool,
}

/// Select the guess minimizing the adversary's largest bucket
///
/// Ties prefer words that are still candidates (they can win outright),
/// then the earliest word in `guess_pool`. Returns `None` if the pool is empty.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::solver::minimax::best_guess;
///
/// let pool = vec![Word::new("zzzzz").unwrap(), Word::new("crane").unwrap()];
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("crane").unwrap()];
///
/// let pool_refs: Vec<&Word> = pool.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let hint = best_guess(&pool_refs, &candidate_refs).unwrap();
/// assert_eq!(hint.word.text(), "CRANE");
/// assert_eq!(hint.worst_case, 1);
/// ```
#[must_use]
pub fn best_guess<'a>(guess_pool: &[&'a Word], candidates: &[&Word]) -> Option<Hint<'a>> {
    guess_pool
        .par_iter()
        .map(|&word| Hint {
            word,
            worst_case: worst_case(word, candidates),
            is_candidate: candidates.contains(&word),
        })
        .min_by_key(|hint| (hint.worst_case, !hint.is_candidate))
}
