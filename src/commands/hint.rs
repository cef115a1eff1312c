//! Hint command
//!
//! Finds the guess that leaves the adversary the smallest bucket.

use crate::core::Word;
use crate::solver::minimax::{Hint, best_guess};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Words evaluated per progress step
const CHUNK_SIZE: usize = 64;

/// Suggested guess for the current candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintResult {
    pub word: String,
    pub worst_case: usize,
    pub is_candidate: bool,
    pub candidates: usize,
}

/// Pick the pool word that minimizes the adversary's largest bucket
///
/// `pool` should be in a stable order (the dictionary sorted alphabetically);
/// ties resolve to the earliest word. Returns `None` for an empty pool or
/// candidate set.
#[must_use]
pub fn suggest_guess<S: BuildHasher>(
    pool: &[&Word],
    candidates: &HashSet<Word, S>,
    show_progress: bool,
) -> Option<HintResult> {
    if candidates.is_empty() {
        return None;
    }

    let mut candidate_refs: Vec<&Word> = candidates.iter().collect();
    candidate_refs.sort_unstable();

    let pb = if show_progress {
        let pb = ProgressBar::new(pool.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb.set_message("scoring guesses");
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut best: Option<Hint> = None;
    for chunk in pool.chunks(CHUNK_SIZE) {
        if let Some(hint) = best_guess(chunk, &candidate_refs) {
            let better = best.as_ref().is_none_or(|current| {
                (hint.worst_case, !hint.is_candidate) < (current.worst_case, !current.is_candidate)
            });
            if better {
                best = Some(hint);
            }
        }
        pb.inc(chunk.len() as u64);
    }
    pb.finish_with_message("done");

    best.map(|hint| HintResult {
        word: hint.word.text().to_string(),
        worst_case: hint.worst_case,
        is_candidate: hint.is_candidate,
        candidates: candidates.len(),
    })
}
