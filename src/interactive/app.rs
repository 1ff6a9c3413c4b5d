//! TUI application state and logic

use crate::core::{Outcome, Session};
use crate::dictionary::WordSet;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session<WordSet>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub notice: Option<Notice>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Words the dictionary admits for the current root
    pub findable: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    /// A rejection alert is up; it swallows the next key press
    Notice,
}

/// A rejection alert, shown until the player acknowledges it
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// How many recent messages the side panel keeps
const MESSAGE_BACKLOG: usize = 5;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub best_score: usize,
    pub total_words: usize,
}

impl App {
    #[must_use]
    pub fn new(session: Session<WordSet>) -> Self {
        let findable = count_findable(&session);

        Self {
            session,
            input_mode: InputMode::Editing,
            input_buffer: String::new(),
            notice: None,
            messages: vec![
                Message {
                    text: "Welcome! Make words from the root's letters.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Ctrl-N starts a new round.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            findable,
            should_quit: false,
        }
    }

    /// Submit the typed word to the session
    ///
    /// Acceptance clears the buffer; rejection raises a notice and keeps the
    /// buffer so the player can fix a typo after dismissing the alert.
    pub fn submit_current(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit(&input) {
            Outcome::Accepted { word, points } => {
                self.input_buffer.clear();
                self.stats.total_words += 1;
                self.stats.best_score = self.stats.best_score.max(self.session.score());
                self.add_message(&format!("{word} +{points}"), MessageStyle::Success);
            }
            Outcome::Rejected(rejection) => {
                let (title, message) = self.session.describe(rejection);
                self.notice = Some(Notice { title, message });
                self.input_mode = InputMode::Notice;
            }
            Outcome::Ignored => {
                self.input_buffer.clear();
            }
        }
    }

    /// Acknowledge the current rejection alert
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.input_mode = InputMode::Editing;
    }

    /// Redraw a root and reset the board
    pub fn new_round(&mut self) {
        self.stats.best_score = self.stats.best_score.max(self.session.score());
        self.session.restart();
        self.findable = count_findable(&self.session);
        self.stats.rounds_played += 1;
        self.input_buffer.clear();
        self.notice = None;
        self.input_mode = InputMode::Editing;
        self.add_message(
            &format!("New round: make words from '{}'", self.session.root()),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MESSAGE_BACKLOG {
            self.messages.remove(0);
        }
    }
}

/// Count the words the dictionary admits for the session's current root
fn count_findable(session: &Session<WordSet>) -> usize {
    session
        .lexicon()
        .words()
        .filter(|word| session.is_playable(word))
        .count()
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal; the game is keyboard-only, so no mouse capture
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases and repeats as separate events
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Notice => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    _ => {
                        // Any other key acknowledges the alert
                        app.dismiss_notice();
                    }
                },
                InputMode::Editing => match key.code {
                    KeyCode::Char('c' | 'q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_round();
                    }
                    KeyCode::Char(c) => {
                        if c.is_alphabetic() {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
                    }
                    KeyCode::Esc => {
                        app.input_buffer.clear();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
