//! Absurdle
//!
//! Wordle with an adversary: instead of hiding one word, the game keeps every
//! word consistent with the feedback so far and answers each guess with the
//! feedback that keeps the most of them alive.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle::core::Word;
//! use absurdle::game::{Dictionary, GameSession};
//! use std::sync::Arc;
//!
//! let dictionary: Dictionary = ["apple", "grape", "paper"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut session = GameSession::new(Arc::new(dictionary));
//!
//! let pattern = session.make_guess("apple").unwrap();
//! println!("Feedback: {pattern}"); // 11002
//! ```

// Core domain types
pub mod core;

// Partitioning, adversarial selection and hints
pub mod solver;

// Dictionary and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command-line configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
