//! Adversary and hint algorithms
//!
//! `partition` and `selector` make up the adversary's move; `minimax`
//! answers it from the player's side.

pub mod minimax;
mod partition;
mod selector;

pub use partition::{Partition, partition};
pub use selector::select_worst_pattern;
