//! Error type shared by word validation, pattern calculation and game play
//!
//! Every variant is recoverable: the caller reports it and asks for another guess.

use thiserror::Error;

/// Errors raised while validating or scoring a guess
///
/// None of these leave a [`GameSession`](crate::game::GameSession) mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Word and guess handed to the pattern engine differ in length
    #[error("word and guess must be the same length (got {word} and {guess})")]
    LengthMismatch { word: usize, guess: usize },

    /// Submitted text is not exactly five characters
    #[error("guess must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    /// Submitted text contains something other than A-Z
    #[error("use only alphabetical characters (found '{0}')")]
    NonAlphabetic(char),

    /// Well-formed guess that is not in the dictionary
    #[error("'{0}' is not in the list of words")]
    UnknownWord(String),

    /// Guess submitted after the game was already won
    #[error("game is over, start a new game to keep playing")]
    GameOver,

    /// Candidate set was empty when a guess was scored
    #[error("no candidate words remain")]
    NoCandidates,
}
