//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::commands::hint::suggest_guess;
use crate::core::GameError;
use crate::game::GameSession;
use crate::output::formatters::pattern_tiles;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut GameSession) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Play until the input ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        out,
        "║                  Absurdle - Interactive Mode                 ║"
    )?;
    writeln!(
        out,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        out,
        "There is no hidden word. Every guess gets the feedback that"
    )?;
    writeln!(
        out,
        "keeps the most words alive. Pin it down to one word to win.\n"
    )?;
    writeln!(
        out,
        "Commands: 'hint' for a suggestion, 'new' for new game, 'quit' to exit\n"
    )?;

    loop {
        let label = format!("Guess {}", session.guess_count() + 1);
        let Some(line) = prompt(input, out, &label)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                session.start_new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            "hint" | "h" | "?" => {
                let pool = session.dictionary().sorted();
                match suggest_guess(&pool, session.candidates(), false) {
                    Some(hint) => writeln!(
                        out,
                        "💡 Try {}: the adversary can keep at most {} of {} words\n",
                        hint.word.bright_yellow().bold(),
                        hint.worst_case,
                        hint.candidates
                    )?,
                    None => writeln!(out, "No hint available\n")?,
                }
            }
            _ => match session.make_guess(&line) {
                Ok(pattern) => {
                    let guess = line.to_ascii_uppercase();
                    writeln!(
                        out,
                        "  {}  {} {}",
                        pattern_tiles(&guess, pattern),
                        pattern,
                        format!("({} words left)", session.candidates_remaining()).bright_black()
                    )?;

                    if session.is_won() {
                        print_victory(session, out)?;
                        let answer = prompt(input, out, "Play again? (yes/no)")?
                            .map(|answer| answer.to_lowercase());
                        if let Some("yes" | "y") = answer.as_deref() {
                            session.start_new_game();
                            writeln!(out, "\n🔄 New game started!\n")?;
                        } else {
                            writeln!(out, "\n👋 Thanks for playing!\n")?;
                            return Ok(());
                        }
                    }
                }
                Err(GameError::UnknownWord(word)) => {
                    writeln!(
                        out,
                        "{}",
                        format!("❌ {word} is not in the word list").red()
                    )?;
                }
                Err(e) => writeln!(out, "{}", format!("❌ {e}").red())?,
            },
        }
    }
}

fn print_victory<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    let turns = session.guess_count();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "          🎉  A B S U R D L E   S O L V E D !  🎉          "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "\n  You won in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, record) in session.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.word.text().bright_white().bold(),
            record.pattern.to_emoji()
        )?;
    }
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())
}

/// Read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
