//! Word lists for Absurdle
//!
//! Provides the embedded dictionary compiled into the binary, plus loaders
//! for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::game::Dictionary;

/// The embedded dictionary
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    loader::dictionary_from_slice(WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let dictionary = embedded_dictionary();
        assert_eq!(dictionary.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_dictionary_has_common_words() {
        let dictionary = embedded_dictionary();
        for word in ["apple", "grape", "paper", "crane", "slate"] {
            assert!(dictionary.contains(&crate::core::Word::new(word).unwrap()));
        }
    }
}
