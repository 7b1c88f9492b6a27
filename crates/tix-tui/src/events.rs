//! Events consumed by the reducer.
//!
//! Terminal input, the tick clock, task lifecycle notifications, and auth
//! results all arrive as `UiEvent`s. Async handlers send these through the
//! runtime inbox; the reducer is the only consumer.

use serde_json::Value;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; drives banner auto-dismiss.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// An async task was spawned.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// An async task finished; `completed.result` is the inner event.
    ///
    /// The reducer only dispatches the inner event if the task id still
    /// matches the active task, which discards results that arrive after
    /// the owning form was torn down.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
    /// Auth results.
    Auth(AuthUiEvent),
}

/// Results of auth submissions.
///
/// Errors arrive pre-normalized to the single display message.
#[derive(Debug)]
pub enum AuthUiEvent {
    LoginFinished { result: Result<Value, String> },
    SignupFinished { result: Result<Value, String> },
}
