//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use serde_json::Value;
use tix_core::auth::{Credentials, Registration};
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Submit login credentials to the backend.
    SubmitLogin {
        task: TaskId,
        credentials: Credentials,
    },

    /// Submit a signup registration to the backend.
    SubmitSignup {
        task: TaskId,
        registration: Registration,
    },

    /// Persist the session extracted from a login payload.
    SaveSession { payload: Value },

    /// Cancel an in-flight task (form was torn down).
    CancelTask { token: CancellationToken },
}
