//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::dictionary::Dictionary;
use crate::game::{GameState, Rules, Session, Statistics};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

const NEXT_GAME_HINT: &str = "Press 'n' for new game or 'q' to quit.";

/// Application state
pub struct App<'a> {
    pub rules: Rules,
    rng: StdRng,
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Rc<RefCell<Statistics>>,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, rules: Rules, mut rng: StdRng) -> Self {
        let stats = Rc::new(RefCell::new(Statistics::default()));
        let session = Self::start_session(dictionary, rules, &mut rng, &stats);

        Self {
            rules,
            rng,
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the five letter word in six tries.".to_string(),
                style: MessageStyle::Info,
            }],
            stats,
            should_quit: false,
        }
    }

    fn start_session(
        dictionary: &'a Dictionary,
        rules: Rules,
        rng: &mut StdRng,
        stats: &Rc<RefCell<Statistics>>,
    ) -> Session<'a> {
        let mut session = Session::with_rules(dictionary, rules, rng);
        session.subscribe(Statistics::tracker(stats));
        session
    }

    pub fn new_game(&mut self) {
        let dictionary = self.session.dictionary();
        self.session = Self::start_session(dictionary, self.rules, &mut self.rng, &self.stats);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Append a letter to the pending guess
    ///
    /// Non-letters and letters past the fifth are ignored.
    pub fn type_letter(&mut self, c: char) {
        if !self.session.is_over()
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < WORD_LENGTH
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the pending guess
    ///
    /// A rejected guess stays in the buffer so it can be corrected.
    pub fn submit(&mut self) {
        match self.session.submit_guess(&self.input_buffer) {
            Ok(outcome) => {
                self.input_buffer.clear();
                if outcome.state == GameState::Won {
                    let celebration = match self.session.guesses().len() {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it in six! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                }
                if let Some(answer) = self.session.answer() {
                    let style = if outcome.state == GameState::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&format!("Good game! The word was {answer}"), style);
                    self.add_message(NEXT_GAME_HINT, MessageStyle::Info);
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
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
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.is_over() {
            match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Enter => self.submit(),
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    tracing::debug!("tui started");

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;

    fn dictionary() -> Dictionary {
        Dictionary::parse("crane").unwrap()
    }

    fn app(dictionary: &Dictionary) -> App<'_> {
        App::new(dictionary, Rules::default(), StdRng::seed_from_u64(3))
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<'_>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_fills_buffer_up_to_word_length() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_word(&mut app, "cr4anes");
        assert_eq!(app.input_buffer, "CRANE");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "CRAN");
    }

    #[test]
    fn rejected_guess_stays_in_buffer() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_word(&mut app, "cra");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_buffer, "CRA");
        assert!(app.session.guesses().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("(got 3 characters)"));
    }

    #[test]
    fn winning_guess_updates_stats() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.state(), GameState::Won);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.borrow().games_won, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn loss_shows_good_game_message() {
        let dictionary = Dictionary::parse("crane slate trace level erase audio built").unwrap();
        let mut app = app(&dictionary);
        let answer = Word::new("crane").unwrap();
        app.session = Session::with_answer(&dictionary, Rules::default(), answer).unwrap();

        for word in ["slate", "trace", "level", "erase", "audio", "built"] {
            type_word(&mut app, word);
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.session.state(), GameState::Lost);
        let reveal = app
            .messages
            .iter()
            .find(|m| m.text == "Good game! The word was CRANE")
            .unwrap();
        assert_eq!(reveal.style, MessageStyle::Error);
    }

    #[test]
    fn win_shows_good_game_message() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Good game! The word was CRANE")
        );
    }

    #[test]
    fn new_game_reuses_session_dictionary() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.new_game();

        assert!(std::ptr::eq(app.session.dictionary(), &dictionary));
    }

    #[test]
    fn letters_ignored_after_game_over() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn n_starts_new_game_after_win() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.session.state(), GameState::InProgress);
        assert!(app.session.guesses().is_empty());
        assert_eq!(app.stats.borrow().games_played, 1);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.stats.borrow().games_played, 2);
    }

    #[test]
    fn n_and_q_are_letters_during_play() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_word(&mut app, "qn");
        assert_eq!(app.input_buffer, "QN");
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        let dictionary = dictionary();

        let mut playing = app(&dictionary);
        press(&mut playing, KeyCode::Esc);
        assert!(playing.should_quit);

        let mut ctrl_c = app(&dictionary);
        ctrl_c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(ctrl_c.should_quit);

        let mut finished = app(&dictionary);
        type_word(&mut finished, "crane");
        press(&mut finished, KeyCode::Enter);
        press(&mut finished, KeyCode::Char('q'));
        assert!(finished.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "9");
    }
}
