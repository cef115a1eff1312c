//! The master word set
//!
//! Built once per run and shared read-only by every session.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Every word accepted as a guess
///
/// Set semantics: duplicates collapse, membership is the main query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from already validated words
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Word;
    /// use absurdle::game::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(
    ///     ["apple", "grape", "apple"].iter().map(|w| Word::new(w).unwrap()),
    /// );
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains(&Word::new("GRAPE").unwrap()));
    /// ```
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// All words in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }

    /// The underlying set, for code that wants a candidate set
    #[must_use]
    pub const fn as_set(&self) -> &FxHashSet<Word> {
        &self.words
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(list: &[&str]) -> Dictionary {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn duplicates_collapse() {
        let dict = dictionary(&["apple", "APPLE", "Apple", "grape"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn membership_is_case_insensitive_through_word() {
        let dict = dictionary(&["apple"]);
        assert!(dict.contains(&Word::new("aPpLe").unwrap()));
        assert!(!dict.contains(&Word::new("grape").unwrap()));
    }

    #[test]
    fn sorted_is_alphabetical() {
        let dict = dictionary(&["paper", "apple", "grape"]);
        let texts: Vec<&str> = dict.sorted().into_iter().map(Word::text).collect();
        assert_eq!(texts, ["APPLE", "GRAPE", "PAPER"]);
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert_eq!(dict.iter().count(), 0);
    }
}
