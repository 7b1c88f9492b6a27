//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tix_core::session::Session;

use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::state::{AppState, Screen, SubmitState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Auto-dismiss settled banners after their display time
            let now = Instant::now();
            app.login.submit.dismiss_expired(now);
            app.signup.submit.dismiss_expired(now);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = {
                let state = app.tasks.state_mut(kind);
                state.finish_if_active(completed.id)
            };
            if ok {
                update(app, *completed.result)
            } else {
                // Superseded or torn down; the result is discarded.
                vec![]
            }
        }
        UiEvent::Auth(AuthUiEvent::LoginFinished { result }) => {
            handle_login_finished(app, result)
        }
        UiEvent::Auth(AuthUiEvent::SignupFinished { result }) => {
            handle_signup_finished(app, result)
        }
    }
}

// ============================================================================
// Auth Result Handlers
// ============================================================================

fn handle_login_finished(app: &mut AppState, result: Result<serde_json::Value, String>) -> Vec<UiEffect> {
    // Only apply to a login form that is still waiting on this submit.
    if app.screen != Screen::Login || !app.login.submit.is_submitting() {
        return vec![];
    }

    match result {
        Ok(payload) => {
            app.login.submit = SubmitState::succeeded();
            app.session = Some(Session::from_payload(&payload));
            vec![UiEffect::SaveSession { payload }]
        }
        Err(message) => {
            app.login.submit = SubmitState::failed(message);
            vec![]
        }
    }
}

fn handle_signup_finished(app: &mut AppState, result: Result<serde_json::Value, String>) -> Vec<UiEffect> {
    if app.screen != Screen::Signup || !app.signup.submit.is_submitting() {
        return vec![];
    }

    match result {
        Ok(_payload) => {
            // Signup payloads carry no session; the user still has to log in.
            app.signup.submit = SubmitState::succeeded();
            vec![]
        }
        Err(message) => {
            app.signup.submit = SubmitState::failed(message);
            vec![]
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keys
    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return vec![];
    }
    match key.code {
        KeyCode::Tab => return switch_screen(app, app.screen.next()),
        KeyCode::BackTab => return switch_screen(app, app.screen.prev()),
        _ => {}
    }

    // Screen-specific keys
    match app.screen {
        Screen::Login => app.login.handle_key(&app.tasks, &mut app.task_seq, key),
        Screen::Signup => app.signup.handle_key(&app.tasks, &mut app.task_seq, key),
        _ => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                app.should_quit = true;
                vec![]
            }
            KeyCode::Right => switch_screen(app, app.screen.next()),
            KeyCode::Left => switch_screen(app, app.screen.prev()),
            _ => vec![],
        },
    }
}

/// Switches screens, tearing down the form being left.
///
/// Teardown resets the form, clears its task slot (so a late response is
/// discarded) and cancels the in-flight request if there is one.
fn switch_screen(app: &mut AppState, next: Screen) -> Vec<UiEffect> {
    if next == app.screen {
        return vec![];
    }

    let effects = match app.screen {
        Screen::Login => app.login.teardown(&mut app.tasks),
        Screen::Signup => app.signup.teardown(&mut app.tasks),
        _ => Vec::new(),
    };

    app.screen = next;
    effects
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
    use crate::screens::login::LoginField;

    fn app_on(screen: Screen) -> AppState {
        let mut app = AppState::new("http://localhost:9000".to_string(), None);
        app.screen = screen;
        app
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_str(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key(KeyCode::Char(c)));
        }
    }

    fn submit_task_id(effects: &[UiEffect]) -> Option<TaskId> {
        effects.iter().find_map(|e| match e {
            UiEffect::SubmitLogin { task, .. } | UiEffect::SubmitSignup { task, .. } => {
                Some(*task)
            }
            _ => None,
        })
    }

    /// Drives a full valid login entry and submit, returning the task id.
    fn submit_valid_login(app: &mut AppState) -> TaskId {
        type_str(app, "ada");
        update(app, key(KeyCode::Down));
        type_str(app, "secret1");
        let effects = update(app, key(KeyCode::Enter));
        let task = submit_task_id(&effects).expect("submit effect");
        // Runtime acknowledges the spawn
        update(
            app,
            UiEvent::TaskStarted {
                kind: TaskKind::Login,
                started: TaskStarted {
                    id: task,
                    cancel: None,
                },
            },
        );
        task
    }

    fn login_completed(task: TaskId, result: Result<serde_json::Value, String>) -> UiEvent {
        UiEvent::TaskCompleted {
            kind: TaskKind::Login,
            completed: TaskCompleted {
                id: task,
                result: Box::new(UiEvent::Auth(AuthUiEvent::LoginFinished { result })),
            },
        }
    }

    /// Test: typing routes into the focused field; Down moves focus.
    #[test]
    fn test_login_field_editing() {
        let mut app = app_on(Screen::Login);

        type_str(&mut app, "ada");
        assert_eq!(app.login.form.identifier, "ada");

        update(&mut app, key(KeyCode::Down));
        assert_eq!(app.login.focus, LoginField::Password);
        type_str(&mut app, "secret1");
        assert_eq!(app.login.form.password, "secret1");

        update(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.login.form.password, "secret");
    }

    /// Test: invalid input fails locally with all messages and no effect.
    #[test]
    fn test_login_validation_failure_no_network() {
        let mut app = app_on(Screen::Login);

        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());

        match &app.login.submit {
            SubmitState::Failed { message, .. } => {
                assert_eq!(
                    message,
                    "Username or email is required. \
                     Password must be at least 6 characters long."
                );
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    /// Test: two rapid submits produce exactly one submit effect.
    #[test]
    fn test_double_submit_single_task() {
        let mut app = app_on(Screen::Login);
        type_str(&mut app, "ada");
        update(&mut app, key(KeyCode::Down));
        type_str(&mut app, "secret1");

        let first = update(&mut app, key(KeyCode::Enter));
        assert!(submit_task_id(&first).is_some());
        assert!(app.login.submit.is_submitting());

        let second = update(&mut app, key(KeyCode::Enter));
        assert!(second.is_empty(), "second submit must be ignored");
    }

    /// Test: login success settles the form, stores the session, and
    /// requests persistence.
    #[test]
    fn test_login_success() {
        let mut app = app_on(Screen::Login);
        let task = submit_valid_login(&mut app);

        let payload = json!({"token": "t", "user_id": 1, "username": "u", "email": "e"});
        let effects = update(&mut app, login_completed(task, Ok(payload.clone())));

        assert!(matches!(app.login.submit, SubmitState::Succeeded { .. }));
        assert_eq!(
            app.session.as_ref().and_then(|s| s.username.as_deref()),
            Some("u")
        );
        assert!(effects
            .iter()
            .any(|e| matches!(e, UiEffect::SaveSession { payload: p } if *p == payload)));
    }

    /// Test: a failed request shows the normalized message.
    #[test]
    fn test_login_failure_message() {
        let mut app = app_on(Screen::Login);
        let task = submit_valid_login(&mut app);

        update(
            &mut app,
            login_completed(task, Err("Invalid credentials".to_string())),
        );

        match &app.login.submit {
            SubmitState::Failed { message, .. } => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(app.session.is_none());
    }

    /// Test: a response arriving after the form was torn down is discarded.
    #[test]
    fn test_stale_response_discarded_after_screen_switch() {
        let mut app = app_on(Screen::Login);
        let task = submit_valid_login(&mut app);

        // User leaves the login screen while the request is in flight
        update(&mut app, key(KeyCode::Tab));
        assert_ne!(app.screen, Screen::Login);
        assert!(!app.login.submit.is_submitting());

        // The response lands afterwards: nothing may change
        let payload = json!({"token": "t"});
        let effects = update(&mut app, login_completed(task, Ok(payload)));

        assert!(effects.is_empty());
        assert!(app.session.is_none());
        assert!(matches!(app.login.submit, SubmitState::Idle));
    }

    /// Test: a completion with a superseded task id is discarded.
    #[test]
    fn test_superseded_task_id_discarded() {
        let mut app = app_on(Screen::Login);
        let _task = submit_valid_login(&mut app);

        let stale = TaskId(999);
        let effects = update(&mut app, login_completed(stale, Ok(json!({"token": "t"}))));

        assert!(effects.is_empty());
        assert!(app.login.submit.is_submitting(), "live submit stays pending");
    }

    /// Test: signup validation reports all violations at once.
    #[test]
    fn test_signup_validation_exhaustive() {
        let mut app = app_on(Screen::Signup);

        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());

        match &app.signup.submit {
            SubmitState::Failed { message, .. } => {
                assert!(message.starts_with("Invalid email address."));
                assert!(message.contains("Username is required."));
                assert!(message.contains("Invalid phone number."));
                assert!(message.contains("First name is required."));
                assert!(message.contains("Last name is required."));
                assert!(message.contains("Company name is required."));
                assert!(message.ends_with("Password must be at least 6 characters long."));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    /// Test: signup success settles the form without touching the session.
    #[test]
    fn test_signup_success_no_session() {
        let mut app = app_on(Screen::Signup);

        // Fill every field: username, email, password, phone, first, last, company
        for (value, last) in [
            ("ada", false),
            ("ada@example.com", false),
            ("secret1", false),
            ("1234567890", false),
            ("Ada", false),
            ("Lovelace", false),
            ("Analytical Engines", true),
        ] {
            type_str(&mut app, value);
            if !last {
                update(&mut app, key(KeyCode::Down));
            }
        }

        let effects = update(&mut app, key(KeyCode::Enter));
        let task = submit_task_id(&effects).expect("submit effect");
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Signup,
                started: TaskStarted {
                    id: task,
                    cancel: None,
                },
            },
        );

        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Signup,
                completed: TaskCompleted {
                    id: task,
                    result: Box::new(UiEvent::Auth(AuthUiEvent::SignupFinished {
                        result: Ok(json!({"id": 7})),
                    })),
                },
            },
        );

        assert!(effects.is_empty());
        assert!(matches!(app.signup.submit, SubmitState::Succeeded { .. }));
        assert!(app.session.is_none());
    }

    /// Test: leaving a screen with an in-flight request cancels it.
    #[test]
    fn test_teardown_cancels_in_flight_task() {
        let mut app = app_on(Screen::Login);
        let task = submit_valid_login(&mut app);

        // Re-mark the task with a cancel token, as the runtime would
        let token = tokio_util::sync::CancellationToken::new();
        app.tasks.login.clear();
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Login,
                started: TaskStarted {
                    id: task,
                    cancel: Some(token.clone()),
                },
            },
        );

        let effects = update(&mut app, key(KeyCode::Tab));
        assert!(effects
            .iter()
            .any(|e| matches!(e, UiEffect::CancelTask { .. })));
        assert!(!app.tasks.login.is_running());
    }

    /// Test: quit keys work on info screens but type into forms.
    #[test]
    fn test_quit_keys() {
        let mut app = app_on(Screen::Home);
        update(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = app_on(Screen::Login);
        update(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.login.form.identifier, "q");

        let mut app = app_on(Screen::Login);
        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(app.should_quit);
    }
}
