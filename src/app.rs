//! Application state for the TUI: which screen is shown, the credential
//! forms, and the active quiz session with its collaborators.

use crate::models::Quiz;
use crate::session::QuizSession;
use crate::store::{InMemoryQuizStore, InMemoryUsers, StoreError, UserDirectory};

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    /// Session load in flight; rendered until quiz and prior responses
    /// are committed together.
    Loading,
    Quiz,
}

/// Which credential field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Email,
    Password,
}

/// Email/password form shared by the login and register screens.
#[derive(Debug, Default)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl CredentialsForm {
    pub fn push_char(&mut self, c: char) {
        self.error = None;
        match self.focus {
            FormField::Email => self.email.push(c),
            FormField::Password => self.password.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        self.error = None;
        match self.focus {
            FormField::Email => self.email.pop(),
            FormField::Password => self.password.pop(),
        };
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Email => FormField::Password,
            FormField::Password => FormField::Email,
        };
    }

    /// Both fields filled; the submit action stays disabled otherwise.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Top-level application state.
pub struct App {
    pub screen: Screen,
    pub form: CredentialsForm,
    users: InMemoryUsers,
    store: InMemoryQuizStore,
    current_user: Option<String>,
    session: Option<QuizSession>,
    selected_response: usize,
    summary_scroll: usize,
}

impl App {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            screen: Screen::Login,
            form: CredentialsForm::default(),
            users: InMemoryUsers::new(),
            store: InMemoryQuizStore::new(quiz),
            current_user: None,
            session: None,
            selected_response: 0,
            summary_scroll: 0,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn selected_response(&self) -> usize {
        self.selected_response
    }

    pub fn summary_scroll(&self) -> usize {
        self.summary_scroll
    }

    pub fn switch_to_register(&mut self) {
        self.form.reset();
        self.screen = Screen::Register;
    }

    pub fn switch_to_login(&mut self) {
        self.form.reset();
        self.screen = Screen::Login;
    }

    /// Attempt login with the form credentials. Success starts the session
    /// load; failure is an inline message.
    pub fn submit_login(&mut self) {
        if !self.form.is_complete() {
            return;
        }
        if self.users.login(&self.form.email, &self.form.password) {
            self.current_user = Some(self.form.email.clone());
            self.form.reset();
            self.screen = Screen::Loading;
        } else {
            self.form.error = Some("Login failed".to_string());
        }
    }

    /// Attempt registration. Success returns to the login screen with the
    /// email kept; failure is an inline message.
    pub fn submit_register(&mut self) {
        if !self.form.is_complete() {
            return;
        }
        if self.users.register(&self.form.email, &self.form.password) {
            let email = std::mem::take(&mut self.form.email);
            self.form.reset();
            self.form.email = email;
            self.screen = Screen::Login;
        } else {
            self.form.error = Some("Registration failed".to_string());
        }
    }

    /// Complete the session load for the logged-in user. Called by the
    /// event loop while the loading screen is up; quiz and prior responses
    /// become visible to the UI in one step.
    pub async fn finish_loading(&mut self) -> Result<(), StoreError> {
        let Some(email) = self.current_user.clone() else {
            self.screen = Screen::Login;
            return Ok(());
        };
        let session = QuizSession::load(&self.store, &email).await?;
        self.session = Some(session);
        self.summary_scroll = 0;
        self.sync_selected_response();
        self.screen = Screen::Quiz;
        Ok(())
    }

    /// Drop the session and return to the login screen.
    pub fn logout(&mut self) {
        self.session = None;
        self.current_user = None;
        self.form.reset();
        self.selected_response = 0;
        self.summary_scroll = 0;
        self.screen = Screen::Login;
    }

    fn option_count(&self) -> Option<usize> {
        self.session
            .as_ref()
            .and_then(|session| session.current_question())
            .map(|question| question.possible_responses.len())
            .filter(|count| *count > 0)
    }

    pub fn select_next_option(&mut self) {
        if let Some(count) = self.option_count() {
            self.selected_response = (self.selected_response + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(count) = self.option_count() {
            self.selected_response = (self.selected_response + count - 1) % count;
        }
    }

    /// Record the highlighted response for the current question.
    pub fn confirm_selection(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some((question_id, response_id)) = session.current_question().and_then(|question| {
            question
                .possible_responses
                .get(self.selected_response)
                .map(|response| (question.question_id, response.response_id))
        }) else {
            return;
        };
        session.select_response(question_id, response_id);
    }

    pub fn go_next(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.can_go_next() {
                session.advance();
                self.sync_selected_response();
            }
        }
    }

    pub fn go_previous(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.can_go_previous() {
                session.go_back();
                self.sync_selected_response();
            }
        }
    }

    /// Submit the session's answers to the repository.
    pub async fn save(&mut self) -> Result<(), StoreError> {
        if let Some(session) = self.session.as_mut() {
            if session.can_save() {
                session.save(&mut self.store).await?;
            }
        }
        Ok(())
    }

    pub fn scroll_summary_down(&mut self) {
        let entries = self.session.as_ref().map_or(0, |s| s.summary().len());
        let max_scroll = entries.saturating_sub(1);
        self.summary_scroll = (self.summary_scroll + 1).min(max_scroll);
    }

    pub fn scroll_summary_up(&mut self) {
        self.summary_scroll = self.summary_scroll.saturating_sub(1);
    }

    /// Keep the highlight on the recorded answer when landing on a
    /// question, as the form would.
    fn sync_selected_response(&mut self) {
        self.selected_response = self
            .session
            .as_ref()
            .and_then(|session| {
                let question = session.current_question()?;
                let recorded = session.current_response_id()?;
                question
                    .possible_responses
                    .iter()
                    .position(|response| response.response_id == recorded)
            })
            .unwrap_or(0);
    }
}
