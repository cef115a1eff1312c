//! Dictionary word representation
//!
//! A Word is a validated, uppercase five-letter sequence over `A`-`Z`.

use super::GameError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A five-letter word, normalized to uppercase
///
/// Immutable once constructed. Equality, hashing and ordering follow the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is uppercased (ASCII only, no locale rules) before validation.
    ///
    /// # Errors
    /// Returns:
    /// - `GameError::InvalidLength` if the text is not exactly 5 characters
    /// - `GameError::NonAlphabetic` if any character falls outside `A`-`Z`
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::{GameError, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert_eq!(Word::new("four"), Err(GameError::InvalidLength(4)));
    /// assert_eq!(Word::new("cr4ne"), Err(GameError::NonAlphabetic('4')));
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, GameError> {
        let text = text.as_ref().to_ascii_uppercase();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(GameError::InvalidLength(length));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(GameError::NonAlphabetic(bad));
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Count how many times each letter occurs
    ///
    /// Used for pattern calculation with duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
