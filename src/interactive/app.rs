//! TUI application state and logic

use crate::error::ConfigError;
use crate::game::{GameState, Input, Outcome, Session, Statistics};
use crate::wordlists::WordLists;
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
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
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
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroRows` if `rows` is 0.
    pub fn new(lists: &'a WordLists, rows: usize, mut rng: StdRng) -> Result<Self, ConfigError> {
        let session = Session::start(lists, rows, &mut rng)?;
        let mut app = Self {
            session,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries!",
                app.session.word_len(),
                app.session.max_rows()
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Translate a key press into session input or an app command
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        if self.session.state().is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_word(),
                KeyCode::Char('t') => self.try_again(),
                _ => {
                    // Letters are not game input once the board is finished
                }
            }
            return;
        }

        let input = match key.code {
            KeyCode::Char(c) => Input::Letter(c),
            KeyCode::Backspace => Input::Backspace,
            KeyCode::Enter => Input::Submit,
            _ => return,
        };
        self.apply(input);
    }

    fn apply(&mut self, input: Input) {
        let outcome = match self.session.handle(input) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match outcome {
            Outcome::Rejected(word) => self.add_message(
                &format!("'{}' is not in the word list", word.text().to_uppercase()),
                MessageStyle::Error,
            ),
            Outcome::Scored(_) => self.after_scored(),
            Outcome::LetterAdded(_) | Outcome::LetterRemoved | Outcome::Ignored => {}
        }
    }

    fn after_scored(&mut self) {
        match self.session.state() {
            GameState::Won => {
                self.stats.record(&self.session);
                let celebration = match self.session.guesses_used() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    "Press 'n' for a new word, 't' to try again or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            GameState::Lost => {
                self.stats.record(&self.session);
                let secret = self.session.secret().text().to_uppercase();
                self.add_message(&format!("Out of tries! The word was {secret}"), MessageStyle::Error);
                self.add_message(
                    "Press 'n' for a new word, 't' to try again or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            GameState::AwaitingInput | GameState::RowSubmitted => {}
        }
    }

    pub fn new_word(&mut self) {
        self.session.new_word(&mut self.rng);
        self.messages.clear();
        self.add_message("New word chosen. Good luck!", MessageStyle::Info);
    }

    pub fn try_again(&mut self) {
        self.session.try_again();
        self.messages.clear();
        self.add_message("Same word, fresh board.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
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

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
