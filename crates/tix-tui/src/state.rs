//! Application state composition.
//!
//! The state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── screen: Screen            (which page is shown)
//! ├── login: LoginScreenState   (login form + submit lifecycle)
//! ├── signup: SignupScreenState (signup form + submit lifecycle)
//! ├── session: Option<Session>  (logged-in user, if any)
//! ├── task_seq: TaskSeq         (async task id generator)
//! └── tasks: Tasks              (task lifecycle state)
//! ```
//!
//! All mutations happen in the reducer; the runtime only executes effects.

use std::time::{Duration, Instant};

use tix_core::session::Session;

use crate::common::{TaskSeq, Tasks};
use crate::screens::login::LoginScreenState;
use crate::screens::signup::SignupScreenState;

/// How long a settled banner stays on screen before auto-dismissing.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The screens of the application. Plays the role of the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Events,
    Hotels,
    Contact,
    About,
    Login,
    Signup,
}

impl Screen {
    /// All screens, in tab order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Home,
            Screen::Events,
            Screen::Hotels,
            Screen::Contact,
            Screen::About,
            Screen::Login,
            Screen::Signup,
        ]
    }

    /// Tab title for this screen.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Events => "Events",
            Screen::Hotels => "Hotels",
            Screen::Contact => "Contact",
            Screen::About => "About",
            Screen::Login => "Login",
            Screen::Signup => "Sign Up",
        }
    }

    /// Returns true if this screen hosts an input form.
    pub fn is_form(self) -> bool {
        matches!(self, Screen::Login | Screen::Signup)
    }

    /// Returns the next screen in tab order (wrapping).
    pub fn next(self) -> Screen {
        let all = Screen::all();
        let idx = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Returns the previous screen in tab order (wrapping).
    pub fn prev(self) -> Screen {
        let all = Screen::all();
        let idx = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Submit lifecycle of a form.
///
/// One instance per mounted form; reset on screen switch. `Succeeded` and
/// `Failed` are the settled states and carry the time they were entered so
/// the tick loop can auto-dismiss the banner.
#[derive(Debug, Clone, Default)]
pub enum SubmitState {
    /// Nothing in flight, no banner.
    #[default]
    Idle,
    /// A request is in flight; further submits are ignored.
    Submitting,
    /// The last submit succeeded.
    Succeeded { shown_at: Instant },
    /// The last submit failed (validation or request); message is displayed.
    Failed { message: String, shown_at: Instant },
}

impl SubmitState {
    pub fn succeeded() -> Self {
        SubmitState::Succeeded {
            shown_at: Instant::now(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        SubmitState::Failed {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    /// Returns true while a request is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Resets a settled banner back to idle once its display time is up.
    pub fn dismiss_expired(&mut self, now: Instant) {
        let expired = match self {
            SubmitState::Succeeded { shown_at } | SubmitState::Failed { shown_at, .. } => {
                now.duration_since(*shown_at) >= MESSAGE_TTL
            }
            SubmitState::Idle | SubmitState::Submitting => false,
        };
        if expired {
            *self = SubmitState::Idle;
        }
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Active screen.
    pub screen: Screen,
    /// Login form state.
    pub login: LoginScreenState,
    /// Signup form state.
    pub signup: SignupScreenState,
    /// Stored session, if the user is logged in.
    pub session: Option<Session>,
    /// Resolved backend base URL (shown in the footer).
    pub base_url: String,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
}

impl AppState {
    /// Creates the initial application state.
    pub fn new(base_url: String, session: Option<Session>) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Home,
            login: LoginScreenState::default(),
            signup: SignupScreenState::default(),
            session,
            base_url,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
        }
    }
}
