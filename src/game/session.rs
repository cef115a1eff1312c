//! A single game of Absurdle
//!
//! The session never commits to a hidden word. It keeps every word that is
//! still consistent with the feedback so far, and answers each guess with the
//! feedback that keeps the most of them alive.

use super::Dictionary;
use crate::core::{GameError, Pattern, Word};
use crate::solver::{partition, select_worst_pattern};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Whether the current game can still accept guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
}

/// One scored guess of the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Game state owned by a single caller
///
/// The dictionary is shared; the candidate set, counter and history belong to
/// this session alone. Not meant for concurrent mutation.
#[derive(Debug, Clone)]
pub struct GameSession {
    dictionary: Arc<Dictionary>,
    candidates: FxHashSet<Word>,
    guesses: usize,
    state: GameState,
    history: Vec<GuessRecord>,
}

impl GameSession {
    /// Start a session over `dictionary`
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Word;
    /// use absurdle::game::{Dictionary, GameSession};
    /// use std::sync::Arc;
    ///
    /// let dictionary: Dictionary = ["apple", "grape", "paper"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut session = GameSession::new(Arc::new(dictionary));
    ///
    /// let pattern = session.make_guess("apple").unwrap();
    /// assert_eq!(pattern.to_string(), "11002");
    /// assert_eq!(session.guess_count(), 1);
    /// assert!(!session.is_won());
    ///
    /// assert!(session.make_guess("grape").unwrap().is_perfect());
    /// assert!(session.is_won());
    /// ```
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        let candidates = dictionary.as_set().clone();
        Self {
            dictionary,
            candidates,
            guesses: 0,
            state: GameState::InProgress,
            history: Vec::new(),
        }
    }

    /// Reset to a fresh game over the full dictionary
    ///
    /// Callable from any state, including after a win.
    pub fn start_new_game(&mut self) {
        self.candidates = self.dictionary.as_set().clone();
        self.guesses = 0;
        self.state = GameState::InProgress;
        self.history.clear();
        info!(candidates = self.candidates.len(), "new game started");
    }

    /// Score a guess and collapse the candidates to the largest bucket
    ///
    /// # Errors
    /// Returns, before touching any state:
    /// - `GameError::GameOver` if the game is already won
    /// - `GameError::InvalidLength` if the guess is not 5 characters
    /// - `GameError::NonAlphabetic` if the guess has characters outside `A`-`Z`
    /// - `GameError::UnknownWord` if the guess is not in the dictionary
    /// - `GameError::NoCandidates` if no candidate words remain
    pub fn make_guess(&mut self, raw_guess: &str) -> Result<Pattern, GameError> {
        if self.is_won() {
            return Err(GameError::GameOver);
        }

        let guess = self.validate(raw_guess)?;

        let mut buckets = partition(&guess, &self.candidates);
        let pattern = select_worst_pattern(&buckets).ok_or(GameError::NoCandidates)?;
        let survivors = buckets.remove(&pattern).ok_or(GameError::NoCandidates)?;

        debug!(
            guess = %guess,
            %pattern,
            buckets = buckets.len() + 1,
            before = self.candidates.len(),
            after = survivors.len(),
            "guess scored"
        );

        self.history.push(GuessRecord {
            word: guess,
            pattern,
            candidates_before: self.candidates.len(),
            candidates_after: survivors.len(),
        });
        self.candidates = survivors;
        self.guesses += 1;

        if pattern.is_perfect() {
            self.state = GameState::Won;
            info!(guesses = self.guesses, "game won");
        }

        Ok(pattern)
    }

    fn validate(&self, raw_guess: &str) -> Result<Word, GameError> {
        let guess = Word::new(raw_guess)?;
        if !self.dictionary.contains(&guess) {
            return Err(GameError::UnknownWord(guess.text().to_string()));
        }
        Ok(guess)
    }

    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Words still consistent with every pattern revealed so far
    #[must_use]
    pub const fn candidates(&self) -> &FxHashSet<Word> {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Guesses of the current game, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(list: &[&str]) -> Arc<Dictionary> {
        Arc::new(list.iter().map(|w| Word::new(w).unwrap()).collect())
    }

    fn fruit_session() -> GameSession {
        GameSession::new(dictionary(&["apple", "grape", "paper"]))
    }

    fn candidate_texts(session: &GameSession) -> Vec<String> {
        let mut texts: Vec<String> = session
            .candidates()
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        texts.sort();
        texts
    }

    #[test]
    fn new_session_starts_with_full_dictionary() {
        let session = fruit_session();
        assert_eq!(session.guess_count(), 0);
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.candidates_remaining(), 3);
        assert!(session.history().is_empty());
    }

    #[test]
    fn tie_break_collapses_to_smallest_pattern() {
        let mut session = fruit_session();

        let pattern = session.make_guess("APPLE").unwrap();

        assert_eq!(pattern.to_string(), "11002");
        assert_eq!(candidate_texts(&session), ["GRAPE"]);
        assert_eq!(session.guess_count(), 1);
        assert!(!session.is_won());
    }

    #[test]
    fn guess_is_case_normalized() {
        let mut session = fruit_session();
        assert_eq!(session.make_guess("aPpLe").unwrap().to_string(), "11002");
    }

    #[test]
    fn adversary_keeps_largest_bucket() {
        // Against CRANE: SLATE/PLATE share a bucket, everything else is alone
        let mut session = GameSession::new(dictionary(&["crane", "slate", "plate", "grape"]));

        let pattern = session.make_guess("crane").unwrap();

        assert_eq!(pattern.to_string(), "00202");
        assert_eq!(candidate_texts(&session), ["PLATE", "SLATE"]);
    }

    #[test]
    fn invalid_length_leaves_state_untouched() {
        let mut session = fruit_session();
        assert_eq!(session.make_guess("appl"), Err(GameError::InvalidLength(4)));
        assert_eq!(session.guess_count(), 0);
        assert_eq!(session.candidates_remaining(), 3);
        assert!(session.history().is_empty());
    }

    #[test]
    fn non_alphabetic_leaves_state_untouched() {
        let mut session = fruit_session();
        assert_eq!(
            session.make_guess("appl3"),
            Err(GameError::NonAlphabetic('3'))
        );
        assert_eq!(session.guess_count(), 0);
        assert_eq!(session.candidates_remaining(), 3);
    }

    #[test]
    fn unknown_word_leaves_state_untouched() {
        let mut session = fruit_session();
        assert_eq!(
            session.make_guess("lemon"),
            Err(GameError::UnknownWord("LEMON".into()))
        );
        assert_eq!(session.guess_count(), 0);
        assert_eq!(session.candidates_remaining(), 3);
    }

    #[test]
    fn errors_mid_game_keep_progress() {
        let mut session = fruit_session();
        session.make_guess("apple").unwrap();

        assert!(session.make_guess("zzzzz").is_err());
        assert_eq!(session.guess_count(), 1);
        assert_eq!(candidate_texts(&session), ["GRAPE"]);
    }

    #[test]
    fn win_is_terminal_until_new_game() {
        let mut session = fruit_session();
        session.make_guess("apple").unwrap();

        let pattern = session.make_guess("grape").unwrap();
        assert!(pattern.is_perfect());
        assert!(session.is_won());
        assert_eq!(session.guess_count(), 2);

        assert_eq!(session.make_guess("paper"), Err(GameError::GameOver));
        assert_eq!(session.guess_count(), 2);
        assert!(session.is_won());
    }

    #[test]
    fn new_game_resets_after_win() {
        let mut session = fruit_session();
        session.make_guess("apple").unwrap();
        session.make_guess("grape").unwrap();
        assert!(session.is_won());

        session.start_new_game();

        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.guess_count(), 0);
        assert_eq!(session.candidates_remaining(), 3);
        assert!(session.history().is_empty());
    }

    #[test]
    fn single_word_dictionary_wins_immediately() {
        let mut session = GameSession::new(dictionary(&["apple"]));
        assert!(session.make_guess("apple").unwrap().is_perfect());
        assert!(session.is_won());
        assert_eq!(session.guess_count(), 1);
    }

    #[test]
    fn candidates_never_grow() {
        let words = [
            "crane", "slate", "plate", "grape", "irate", "trace", "crate", "apple", "paper",
        ];
        let guesses = [
            "slate", "crane", "apple", "paper", "irate", "trace", "crate",
        ];
        let mut session = GameSession::new(dictionary(&words));

        let mut previous = session.candidates_remaining();
        for guess in guesses {
            if session.is_won() {
                break;
            }
            session.make_guess(guess).unwrap();
            assert!(session.candidates_remaining() <= previous);
            assert!(session.candidates_remaining() >= 1);
            previous = session.candidates_remaining();
        }
    }

    #[test]
    fn history_records_each_guess() {
        let mut session = fruit_session();
        session.make_guess("apple").unwrap();
        session.make_guess("grape").unwrap();

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].word.text(), "APPLE");
        assert_eq!(history[0].candidates_before, 3);
        assert_eq!(history[0].candidates_after, 1);
        assert!(history[1].pattern.is_perfect());
    }

    #[test]
    fn sessions_share_dictionary_independently() {
        let shared = dictionary(&["apple", "grape", "paper"]);
        let mut first = GameSession::new(Arc::clone(&shared));
        let second = GameSession::new(Arc::clone(&shared));

        first.make_guess("apple").unwrap();

        assert_eq!(first.candidates_remaining(), 1);
        assert_eq!(second.candidates_remaining(), 3);
        assert_eq!(shared.len(), 3);
    }
}
