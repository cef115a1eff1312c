//! Feedback pattern calculation and representation
//!
//! A pattern is the per-position verdict of a guess against a word:
//! - 0 = Absent (letter not available in the word)
//! - 1 = Present (letter in the word, wrong position)
//! - 2 = Exact (letter in the correct position)
//!
//! Patterns order lexicographically by position with `0 < 1 < 2`, which is the
//! order the adversary scans them in when breaking ties.

use super::{GameError, WORD_LENGTH, Word};
use std::fmt;

/// Verdict for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Absent,
    Present,
    Exact,
}

impl Feedback {
    /// Digit used in the textual form of a pattern
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Exact => '2',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' | '-' | '_' | '⬜' => Some(Self::Absent),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '2' | 'G' | 'g' | '🟩' => Some(Self::Exact),
            _ => None,
        }
    }
}

/// Feedback pattern for one (word, guess) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// Every position exact: the guess is the word
    pub const PERFECT: Self = Self([Feedback::Exact; WORD_LENGTH]);

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern `guess` earns when `word` is the hidden word
    ///
    /// # Algorithm
    /// 1. Count the letters of `word`
    /// 2. First pass: mark exact matches and spend their letters
    /// 3. Second pass, left to right: mark present while the letter still has
    ///    unspent occurrences, otherwise absent
    ///
    /// Both passes must run in this order. A letter that appears more often in
    /// the guess than it remains in the word is credited to the leftmost
    /// positions first.
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::{Pattern, Word};
    ///
    /// let word = Word::new("apple").unwrap();
    /// let guess = Word::new("paper").unwrap();
    ///
    /// assert_eq!(Pattern::calculate(&word, &guess).to_string(), "11210");
    /// ```
    #[must_use]
    pub fn calculate(word: &Word, guess: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut remaining = word.letter_counts();

        for (i, (&w, &g)) in word.chars().iter().zip(guess.chars()).enumerate() {
            if g == w {
                result[i] = Feedback::Exact;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Feedback::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|f| match f {
                Feedback::Exact => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

/// Compute the pattern for raw `word` and `guess` strings
///
/// Both inputs are case-normalized before comparison.
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the inputs differ in length, or the
/// word validation errors of [`Word::new`] otherwise.
///
/// # Examples
/// ```
/// use absurdle::core::{GameError, compute_pattern};
///
/// assert_eq!(compute_pattern("grape", "APPLE").unwrap().to_string(), "11002");
/// assert_eq!(
///     compute_pattern("grape", "app"),
///     Err(GameError::LengthMismatch { word: 5, guess: 3 })
/// );
/// ```
pub fn compute_pattern(word: &str, guess: &str) -> Result<Pattern, GameError> {
    let (word_len, guess_len) = (word.chars().count(), guess.chars().count());
    if word_len != guess_len {
        return Err(GameError::LengthMismatch {
            word: word_len,
            guess: guess_len,
        });
    }

    Ok(Pattern::calculate(&Word::new(word)?, &Word::new(guess)?))
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.digit())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    /// Parse "11210", "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid pattern string: {s}");

        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut chars = s.chars();
        for slot in &mut result {
            let ch = chars.next().ok_or_else(invalid)?;
            *slot = Feedback::from_char(ch).ok_or_else(invalid)?;
        }
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(result))
    }
}
