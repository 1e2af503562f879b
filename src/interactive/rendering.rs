//! TUI rendering with ratatui
//!
//! Tile board, on-screen keyboard and session statistics.

use super::app::{App, MessageStyle};
use crate::core::{LetterResult, WORD_LENGTH};
use crate::game::{GameState, MAX_GUESSES};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Messages and distribution
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

/// Background colour of a scored tile or key
const fn result_color(result: LetterResult) -> Color {
    match result {
        LetterResult::CorrectPosition => Color::Green,
        LetterResult::CorrectLetterWrongPosition => Color::Yellow,
        LetterResult::Incorrect => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Option<Color>) -> Span<'static> {
    let style = bg.map_or_else(
        || Style::default().fg(Color::White),
        |bg| {
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        },
    );
    Span::styled(format!(" {letter} "), style)
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_GUESSES as u16 * 2 + 1), // Board
            Constraint::Min(5),                             // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let guesses = app.session.guesses();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        if let Some(record) = guesses.get(row) {
            for (letter, result) in record.tiles() {
                spans.push(tile(char::from(letter), Some(result_color(result))));
                spans.push(Span::raw(" "));
            }
        } else if row == guesses.len() && !app.session.is_over() {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for col in 0..WORD_LENGTH {
                let letter = typed.get(col).copied().unwrap_or('_');
                spans.push(tile(letter, None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let alphabet = app.session.alphabet();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| tile(char::from(letter), alphabet.get(letter).map(result_color)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Distribution
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
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

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats.borrow();
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    let lines: Vec<Line> = stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let bar = crate::output::formatters::create_progress_bar(
                count as f64,
                most as f64,
                usize::from(area.width.saturating_sub(10)),
            );
            Line::from(vec![
                Span::raw(format!("{} ", i + 1)),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let distribution = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(distribution, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (app.session.state(), app.session.answer()) {
        (GameState::Won, Some(answer)) => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            answer.to_string(),
            Color::Green,
        ),
        (GameState::Lost, Some(answer)) => (
            " The word was | Press 'n' for new game or 'q' to quit ",
            answer.to_string(),
            Color::Red,
        ),
        _ => (
            " Type a guess | Enter to submit ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let rules = app.session.rules();
    let mode = Paragraph::new(format!("Scoring: {}", rules.scoring)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.stats.borrow();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let streak_text = format!(
        "Streak: {} (max {}) | Left: {}",
        stats.current_streak,
        stats.max_streak,
        app.session.guesses_remaining()
    );
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.session.is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit | Backspace: Delete"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::Rules;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_typed_letters_and_keyboard() {
        let dictionary = Dictionary::parse("crane").unwrap();
        let mut app = App::new(&dictionary, Rules::default(), StdRng::seed_from_u64(1));
        app.type_letter('c');
        app.type_letter('r');

        // Each tile is padded and followed by a gap
        let text = screen(&app);
        assert!(text.contains(" C   R   _   _   _ "));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Games: 0"));
    }

    #[test]
    fn reveals_answer_once_over() {
        let dictionary = Dictionary::parse("crane").unwrap();
        let mut app = App::new(&dictionary, Rules::default(), StdRng::seed_from_u64(1));
        for c in "crane".chars() {
            app.type_letter(c);
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let text = screen(&app);
        assert!(text.contains("CONGRATULATIONS"));
        assert!(text.contains("Games: 1 | Win Rate: 100%"));
    }
}
