//! TUI application state and logic

use crate::commands::hint::{HintResult, suggest_guess};
use crate::core::{GameError, WORD_LENGTH};
use crate::game::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub hint: Option<HintResult>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals across the games played this run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub total_guesses: usize,
    pub best: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.games_won > 0).then(|| self.total_guesses as f64 / self.games_won as f64)
    }

    fn record_win(&mut self, guesses: usize) {
        self.games_won += 1;
        self.total_guesses += guesses;
        self.best = Some(self.best.map_or(guesses, |best| best.min(guesses)));
    }
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome to Absurdle! The word changes to dodge you.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a guess and press Enter. TAB asks for a hint.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            hint: None,
            should_quit: false,
        }
    }

    /// Add a letter to the pending guess
    pub fn type_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the pending guess to the session
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.session.make_guess(&guess) {
            Ok(pattern) => {
                self.input_buffer.clear();
                self.hint = None;

                if self.session.is_won() {
                    let guesses = self.session.guess_count();
                    self.stats.record_win(guesses);
                    self.add_message(
                        &format!(
                            "🎉 You won in {guesses} {}!",
                            if guesses == 1 { "move" } else { "moves" }
                        ),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!(
                            "{guess} → {pattern} ({} words left)",
                            self.session.candidates_remaining()
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(GameError::UnknownWord(word)) => {
                self.add_message(
                    &format!("{word} is not in the word list"),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session.start_new_game();
        self.stats.games_played += 1;
        self.input_buffer.clear();
        self.hint = None;
        self.messages.clear();
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    /// Compute the minimax suggestion for the current candidates
    pub fn request_hint(&mut self) {
        let pool = self.session.dictionary().sorted();
        self.hint = suggest_guess(&pool, self.session.candidates(), false);

        let text = match &self.hint {
            Some(hint) => format!(
                "Hint: {} leaves at most {} words",
                hint.word, hint.worst_case
            ),
            None => "No hint available".to_string(),
        };
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        if self.session.is_won() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.request_hint(),
            KeyCode::Char(c) => self.type_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::dictionary_from_slice;
    use std::sync::Arc;

    fn new_app() -> App {
        let dictionary = Arc::new(dictionary_from_slice(&["apple", "grape", "paper"]));
        App::new(GameSession::new(dictionary))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_uppercased_and_capped() {
        let mut app = new_app();
        for c in "apples1".chars() {
            app.type_char(c);
        }
        assert_eq!(app.input_buffer, "APPLE");

        app.backspace();
        assert_eq!(app.input_buffer, "APPL");
    }

    #[test]
    fn submit_scores_guess_and_clears_input() {
        let mut app = new_app();
        type_word(&mut app, "apple");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.guess_count(), 1);
        assert!(app.messages.last().unwrap().text.contains("11002"));
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let mut app = new_app();
        type_word(&mut app, "appl");

        assert_eq!(app.input_buffer, "APPL");
        assert_eq!(app.session.guess_count(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn win_records_stats_and_new_game_resets() {
        let mut app = new_app();
        type_word(&mut app, "apple");
        type_word(&mut app, "grape");

        assert!(app.session.is_won());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.best, Some(2));
        assert_eq!(app.stats.average_guesses(), Some(2.0));

        // Letters are ignored once the game is won
        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.session.is_won());
        assert_eq!(app.session.guess_count(), 0);
        assert_eq!(app.stats.games_played, 2);
    }

    #[test]
    fn hint_is_offered_and_cleared_by_guess() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        assert!(app.hint.is_some());

        type_word(&mut app, "apple");
        assert!(app.hint.is_none());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = new_app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
