//! Login screen: two-field form driving the login endpoint.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use tix_core::auth::{Credentials, validate_login};

use super::form::{FieldView, render_form};
use crate::common::{TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::state::SubmitState;

/// Fields of the login form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Identifier,
    Password,
}

impl LoginField {
    pub fn label(self) -> &'static str {
        match self {
            LoginField::Identifier => "Email or Username",
            LoginField::Password => "Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, LoginField::Password)
    }

    pub fn next(self) -> Self {
        match self {
            LoginField::Identifier => LoginField::Password,
            LoginField::Password => LoginField::Identifier,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields: prev == next
        self.next()
    }
}

/// State for the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginScreenState {
    /// Current input record, replaced as a whole on each edit.
    pub form: Credentials,
    /// Focused field.
    pub focus: LoginField,
    /// Submit lifecycle.
    pub submit: SubmitState,
}

impl LoginScreenState {
    /// Resets the form to its initial state (unmount semantics).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn field_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Identifier => &mut self.form.identifier,
            LoginField::Password => &mut self.form.password,
        }
    }

    /// Handles a key event while this screen is active.
    pub fn handle_key(
        &mut self,
        tasks: &Tasks,
        seq: &mut TaskSeq,
        key: KeyEvent,
    ) -> Vec<UiEffect> {
        // Inputs are disabled while a request is in flight.
        if self.submit.is_submitting() {
            return vec![];
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up => {
                self.focus = self.focus.prev();
                vec![]
            }
            KeyCode::Down => {
                self.focus = self.focus.next();
                vec![]
            }
            KeyCode::Enter => self.submit(tasks, seq),
            KeyCode::Backspace => {
                let field = self.focus;
                self.field_mut(field).pop();
                vec![]
            }
            KeyCode::Char(c) if !ctrl => {
                let field = self.focus;
                self.field_mut(field).push(c);
                vec![]
            }
            _ => vec![],
        }
    }

    /// Runs validation and, if it passes, requests a login task.
    ///
    /// A submit while one is already in flight is ignored, so rapid repeated
    /// submits produce exactly one network call.
    pub fn submit(&mut self, tasks: &Tasks, seq: &mut TaskSeq) -> Vec<UiEffect> {
        if self.submit.is_submitting() || tasks.login.is_running() {
            return vec![];
        }

        let errors = validate_login(&self.form);
        if !errors.is_empty() {
            self.submit = SubmitState::failed(errors.join(" "));
            return vec![];
        }

        self.submit = SubmitState::Submitting;
        vec![UiEffect::SubmitLogin {
            task: seq.next_id(),
            credentials: self.form.clone(),
        }]
    }

    /// Tears the form down when the user leaves the screen.
    ///
    /// Cancels any in-flight request and clears the task slot so a late
    /// response is discarded instead of applied to a fresh form.
    pub fn teardown(&mut self, tasks: &mut Tasks) -> Vec<UiEffect> {
        let mut effects = Vec::new();
        if let Some(token) = tasks.login.cancel.clone() {
            effects.push(UiEffect::CancelTask { token });
        }
        tasks.login.clear();
        self.reset();
        effects
    }

    /// Renders the login screen.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let fields = [
            FieldView {
                label: LoginField::Identifier.label(),
                value: &self.form.identifier,
                secret: LoginField::Identifier.is_secret(),
                focused: self.focus == LoginField::Identifier,
            },
            FieldView {
                label: LoginField::Password.label(),
                value: &self.form.password,
                secret: LoginField::Password.is_secret(),
                focused: self.focus == LoginField::Password,
            },
        ];
        render_form(
            frame,
            area,
            "Login to Your Account",
            "Welcome back! Please log in to continue.",
            &fields,
            &self.submit,
            "Login",
        );
    }
}
