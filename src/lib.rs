//! # daily-quiz
//!
//! A terminal quiz application with conditional questions.
//!
//! A user registers or logs in, answers the questions of the current quiz
//! (some only shown depending on earlier answers), reviews the responses
//! on a summary screen and submits them. Previously submitted users see
//! their summary read-only.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daily_quiz::{QuizApp, QuizError, sample_quiz};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Run with the built-in quiz, or load one with QuizApp::from_json.
//!     let app = QuizApp::new(sample_quiz());
//!     app.run().await?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod session;
pub mod store;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub use app::{App, CredentialsForm, FormField, Screen};
pub use data::{LoadError, load_quiz_from_json, sample_quiz};
pub use models::{DisplayCondition, Question, Quiz, Response, UserResponse, UserResponses};
pub use store::StoreError;

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading the quiz file.
    Load(LoadError),
    /// IO error during quiz execution.
    Io(io::Error),
    /// Error from the response store.
    Store(StoreError),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load quiz: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
            QuizError::Store(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
            QuizError::Store(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

impl From<StoreError> for QuizError {
    fn from(err: StoreError) -> Self {
        QuizError::Store(err)
    }
}

/// A quiz application instance that can be run in the terminal.
pub struct QuizApp {
    app: App,
}

impl QuizApp {
    /// Create an application serving the given quiz, with empty in-memory
    /// user and response stores.
    pub fn new(quiz: Quiz) -> Self {
        Self {
            app: App::new(quiz),
        }
    }

    /// Load the quiz to serve from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let quiz = load_quiz_from_json(path)?;
        Ok(Self::new(quiz))
    }

    /// Run the application in the terminal. Takes over the terminal,
    /// returns when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // The loading screen is up; finish the session load before
        // accepting input again.
        if app.screen == Screen::Loading {
            app.finish_loading().await?;
            continue;
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_input(app, key).await? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool, QuizError> {
    match app.screen {
        Screen::Login | Screen::Register => Ok(handle_credentials_input(app, key)),
        Screen::Loading => Ok(false),
        Screen::Quiz => handle_quiz_input(app, key).await,
    }
}

fn handle_credentials_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('r') | KeyCode::Char('R') = key.code {
            match app.screen {
                Screen::Register => app.switch_to_login(),
                _ => app.switch_to_register(),
            }
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Tab => app.form.toggle_focus(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Enter => match app.screen {
            Screen::Register => app.submit_register(),
            _ => app.submit_login(),
        },
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    false
}

async fn handle_quiz_input(app: &mut App, key: KeyEvent) -> Result<bool, QuizError> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('l') | KeyCode::Char('L') = key.code {
            app.logout();
        }
        return Ok(false);
    }

    let at_summary = app.session().is_some_and(|session| session.at_summary());
    if at_summary {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.scroll_summary_down(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_summary_up(),
            KeyCode::Char('s') | KeyCode::Char('S') => app.save().await?,
            KeyCode::Left | KeyCode::Char('p') => app.go_previous(),
            KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => app.confirm_selection(),
            KeyCode::Right | KeyCode::Char('n') => app.go_next(),
            KeyCode::Left | KeyCode::Char('p') => app.go_previous(),
            KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
            _ => {}
        }
    }
    Ok(false)
}
