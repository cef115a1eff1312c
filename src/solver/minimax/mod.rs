//! Minimax hints for the player
//!
//! The adversary maximizes the surviving bucket; the player's best reply
//! minimizes that maximum.

mod calculator;
mod selector;

pub use calculator::worst_case;
pub use selector::{Hint, best_guess};
