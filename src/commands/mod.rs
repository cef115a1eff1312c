//! Command implementations

pub mod analyze;
pub mod hint;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_word};
pub use hint::{HintResult, suggest_guess};
pub use simple::run_simple;
