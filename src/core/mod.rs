//! Core domain types for Absurdle
//!
//! Words, feedback patterns and the errors raised while building them.
//! Everything here is pure: no I/O, no shared state.

mod error;
mod pattern;
mod word;

pub use error::GameError;
pub use pattern::{Feedback, Pattern, compute_pattern};
pub use word::{WORD_LENGTH, Word};
