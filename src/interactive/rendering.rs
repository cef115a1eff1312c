//! TUI rendering with ratatui
//!
//! Board of letter tiles on the left, game status on the right.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, Pattern};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 ABSURDLE - the word that won't sit still")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(feedback: Feedback) -> Style {
    let bg = match feedback {
        Feedback::Exact => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::White,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile_row(word: &str, pattern: Pattern) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (letter, &feedback) in word.chars().zip(pattern.feedback()) {
        spans.push(Span::styled(format!(" {letter} "), tile_style(feedback)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn pending_row(input: &str) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    let mut letters = input.chars();
    for _ in 0..crate::core::WORD_LENGTH {
        let letter = letters.next().unwrap_or('_');
        spans.push(Span::styled(
            format!(" {letter} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();

    // Two lines per row (tiles + spacing), newest rows win when space runs out
    let visible_rows = (area.height.saturating_sub(2) / 2).max(1) as usize;
    let pending = usize::from(!app.session.is_won());
    let skip = (history.len() + pending).saturating_sub(visible_rows);

    let mut lines = Vec::new();
    for record in history.iter().skip(skip) {
        lines.push(tile_row(record.word.text(), record.pattern));
        lines.push(Line::from(""));
    }
    if pending == 1 {
        lines.push(pending_row(&app.input_buffer));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Board - guess {} ", app.session.guess_count()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Words remaining gauge
            Constraint::Length(5), // Hint
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_remaining(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_remaining(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.dictionary().len().max(1);
    let remaining = app.session.candidates_remaining();
    let percent = ((remaining * 100) / total).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Still Possible ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining} / {total}"));

    f.render_widget(gauge, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.hint {
        Some(hint) => vec![
            Line::from(vec![
                Span::raw("Try: "),
                Span::styled(
                    hint.word.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Worst case: {} of {} words",
                hint.worst_case, hint.candidates
            )),
        ],
        None => vec![Line::from("Press TAB for a hint")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = if app.session.is_won() {
        (
            " 🎉 YOU WON! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        )
    } else {
        (
            " Enter Guess (5 letters) | TAB for hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        )
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.games_played, app.stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let average_text = match (app.stats.average_guesses(), app.stats.best) {
        (Some(average), Some(best)) => format!("Avg: {average:.1} | Best: {best}"),
        _ => "Avg: - | Best: -".to_string(),
    };
    f.render_widget(
        Paragraph::new(average_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.session.is_won() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Ctrl-N: New Game | Enter: Submit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;
    use crate::wordlists::loader::dictionary_from_slice;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_board_and_status() {
        let dictionary = Arc::new(dictionary_from_slice(&["apple", "grape", "paper"]));
        let mut app = App::new(GameSession::new(dictionary));
        for c in "apple".chars() {
            app.type_char(c);
        }
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("ABSURDLE"));
        assert!(text.contains("1 / 3"));
        assert!(text.contains("Games: 1"));
    }

    #[test]
    fn tile_row_colors_match_feedback() {
        let pattern: Pattern = "21000".parse().unwrap();
        let line = tile_row("CRANE", pattern);

        let tiles: Vec<&Span> = line
            .spans
            .iter()
            .filter(|s| s.content.trim().len() == 1)
            .collect();
        assert_eq!(tiles.len(), 5);
        assert_eq!(tiles[0].style.bg, Some(Color::Green));
        assert_eq!(tiles[1].style.bg, Some(Color::Yellow));
        assert_eq!(tiles[2].style.bg, Some(Color::White));
    }

    #[test]
    fn pending_row_pads_with_blanks() {
        let line = pending_row("AB");
        let letters: String = line.spans.iter().map(|s| s.content.trim()).collect();
        assert_eq!(letters, "AB___");
    }
}
