//! Signup screen: seven-field registration form driving the signup endpoint.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use tix_core::auth::{Registration, validate_signup};

use super::form::{FieldView, render_form};
use crate::common::{TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::state::SubmitState;

/// Fields of the signup form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Username,
    Email,
    Password,
    Phone,
    FirstName,
    LastName,
    Company,
}

impl SignupField {
    /// All fields, in focus (and display) order.
    pub fn all() -> &'static [SignupField] {
        &[
            SignupField::Username,
            SignupField::Email,
            SignupField::Password,
            SignupField::Phone,
            SignupField::FirstName,
            SignupField::LastName,
            SignupField::Company,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            SignupField::Username => "Username",
            SignupField::Email => "Email",
            SignupField::Password => "Password",
            SignupField::Phone => "Phone",
            SignupField::FirstName => "First Name",
            SignupField::LastName => "Last Name",
            SignupField::Company => "Company",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, SignupField::Password)
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// State for the signup screen.
#[derive(Debug, Clone, Default)]
pub struct SignupScreenState {
    /// Current input record, replaced as a whole on each edit.
    pub form: Registration,
    /// Focused field.
    pub focus: SignupField,
    /// Submit lifecycle.
    pub submit: SubmitState,
}

impl SignupScreenState {
    /// Resets the form to its initial state (unmount semantics).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn field_mut(&mut self, field: SignupField) -> &mut String {
        match field {
            SignupField::Username => &mut self.form.username,
            SignupField::Email => &mut self.form.email,
            SignupField::Password => &mut self.form.password,
            SignupField::Phone => &mut self.form.phone,
            SignupField::FirstName => &mut self.form.first_name,
            SignupField::LastName => &mut self.form.last_name,
            SignupField::Company => &mut self.form.company,
        }
    }

    fn field_value(&self, field: SignupField) -> &str {
        match field {
            SignupField::Username => &self.form.username,
            SignupField::Email => &self.form.email,
            SignupField::Password => &self.form.password,
            SignupField::Phone => &self.form.phone,
            SignupField::FirstName => &self.form.first_name,
            SignupField::LastName => &self.form.last_name,
            SignupField::Company => &self.form.company,
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

    /// Runs validation and, if it passes, requests a signup task.
    ///
    /// A submit while one is already in flight is ignored.
    pub fn submit(&mut self, tasks: &Tasks, seq: &mut TaskSeq) -> Vec<UiEffect> {
        if self.submit.is_submitting() || tasks.signup.is_running() {
            return vec![];
        }

        let errors = validate_signup(&self.form);
        if !errors.is_empty() {
            self.submit = SubmitState::failed(errors.join(" "));
            return vec![];
        }

        self.submit = SubmitState::Submitting;
        vec![UiEffect::SubmitSignup {
            task: seq.next_id(),
            registration: self.form.clone(),
        }]
    }

    /// Tears the form down when the user leaves the screen.
    pub fn teardown(&mut self, tasks: &mut Tasks) -> Vec<UiEffect> {
        let mut effects = Vec::new();
        if let Some(token) = tasks.signup.cancel.clone() {
            effects.push(UiEffect::CancelTask { token });
        }
        tasks.signup.clear();
        self.reset();
        effects
    }

    /// Renders the signup screen.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let fields: Vec<FieldView<'_>> = SignupField::all()
            .iter()
            .map(|field| FieldView {
                label: field.label(),
                value: self.field_value(*field),
                secret: field.is_secret(),
                focused: self.focus == *field,
            })
            .collect();
        render_form(
            frame,
            area,
            "Create your account",
            "Create an account to get started.",
            &fields,
            &self.submit,
            "Sign-up",
        );
    }
}
