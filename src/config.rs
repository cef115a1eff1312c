//! Run configuration
//!
//! Everything is set from the command line; this module turns the parsed
//! flags into the values the game needs.

use crate::game::Dictionary;
use crate::wordlists::{embedded_dictionary, loader::load_from_file};
use anyhow::{Context, Result, bail};
use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// The list compiled into the binary
    Embedded,
    /// A text file with one word per line
    File(PathBuf),
}

impl WordlistSource {
    /// Load the dictionary this source points at
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn load(&self) -> Result<Dictionary> {
        let dictionary = match self {
            Self::Embedded => {
                let dictionary = embedded_dictionary();
                info!(words = dictionary.len(), "using embedded word list");
                dictionary
            }
            Self::File(path) => load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?,
        };

        if dictionary.is_empty() {
            bail!("word list contains no valid five-letter words");
        }

        Ok(dictionary)
    }
}

impl FromStr for WordlistSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" | "" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

/// Log filter used when `RUST_LOG` is not set
#[must_use]
pub const fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "absurdle=debug" } else { "warn" }
}
