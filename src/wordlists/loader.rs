//! Word list loading utilities
//!
//! Provides functions to build a dictionary from a file or the embedded list.

use crate::core::Word;
use crate::game::Dictionary;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Load a dictionary from a file of whitespace-separated words
///
/// Words may share a line. Entries that are not five letters A-Z are skipped
/// and reported in a single warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use absurdle::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let dictionary: Dictionary = content
        .split_whitespace()
        .filter_map(|entry| Word::new(entry).inspect_err(|_| skipped += 1).ok())
        .collect();

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped invalid word list entries");
    }
    info!(path = %path.display(), words = dictionary.len(), "loaded word list");

    Ok(dictionary)
}

/// Convert embedded string slice to Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use absurdle::wordlists::loader::words_from_slice;
/// use absurdle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build a dictionary from a string slice, skipping invalid entries
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    words_from_slice(slice).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn dictionary_from_slice_deduplicates() {
        let dictionary = dictionary_from_slice(&["crane", "CRANE", "slate"]);
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\n\n  Grape  \npaper\nbanana\nsh0rt").unwrap();

        let dictionary = load_from_file(file.path()).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains(&Word::new("grape").unwrap()));
    }

    #[test]
    fn load_from_file_splits_on_any_whitespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple grape\tpaper\n crane  slate ").unwrap();

        let dictionary = load_from_file(file.path()).unwrap();

        assert_eq!(dictionary.len(), 5);
        assert!(dictionary.contains(&Word::new("paper").unwrap()));
        assert!(dictionary.contains(&Word::new("slate").unwrap()));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
