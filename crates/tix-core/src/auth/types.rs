//! Auth request records and the error taxonomy shared across the client
//! and the front-ends.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed message for failures where no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error. Please try again later.";

/// Login credentials.
///
/// `identifier` accepts either a username or an email address. The wire
/// field name is `usernameOrEmail`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "usernameOrEmail")]
    pub identifier: String,
    pub password: String,
}

/// Signup registration record.
///
/// Serialized with camelCase field names (`firstName`, `lastName`) to
/// match the backend contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
}

/// The two auth operations, used for error messages and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Signup,
}

impl Operation {
    /// Human-readable label used in fallback error messages.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Login => "Login",
            Operation::Signup => "Sign-up",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categories of auth errors for consistent error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    /// Local validation failed before any network call
    Validation,
    /// No response received (connect failure, timeout, DNS)
    Network,
    /// Server responded with a non-2xx status
    Http,
    /// Server responded 2xx but the body was not valid JSON
    Parse,
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthErrorKind::Validation => write!(f, "validation"),
            AuthErrorKind::Network => write!(f, "network"),
            AuthErrorKind::Http => write!(f, "http"),
            AuthErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured auth error with kind and details.
///
/// `message` is the single line shown to the user; `details` carries raw
/// material (e.g. the response body) for the debug log only.
#[derive(Debug, Clone)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
    pub details: Option<String>,
}

impl AuthError {
    /// Creates a new auth error.
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates a validation error from an ordered list of rule violations.
    ///
    /// Violations are joined with single spaces into one displayable line.
    pub fn validation(errors: &[String]) -> Self {
        Self::new(AuthErrorKind::Validation, errors.join(" "))
    }

    /// Creates the fixed no-response error.
    pub fn network() -> Self {
        Self::new(AuthErrorKind::Network, NETWORK_ERROR_MESSAGE)
    }

    /// Creates an HTTP status error, extracting a display message from the
    /// response body.
    ///
    /// Body fields are tried in priority order: `error`, first element of
    /// `non_field_errors`, `detail`, `message`. If none yields a string the
    /// message falls back to `"Error <status>: <operation> failed."`.
    pub fn http_status(status: u16, body: &str, operation: Operation) -> Self {
        let message = extract_error_message(body)
            .unwrap_or_else(|| format!("Error {status}: {} failed.", operation.label()));
        let details = if body.is_empty() {
            None
        } else {
            Some(body.to_string())
        };
        Self {
            kind: AuthErrorKind::Http,
            message,
            details,
        }
    }

    /// Creates a parse error for a 2xx response with a non-JSON body.
    pub fn parse(operation: Operation, details: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Parse,
            message: format!("{} response was not valid JSON.", operation.label()),
            details: Some(details.into()),
        }
    }
}

/// Extracts a display message from a structured error body, if any.
fn extract_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    if let Some(msg) = json.get("error").and_then(Value::as_str) {
        return Some(msg.to_string());
    }
    if let Some(msg) = json
        .get("non_field_errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(Value::as_str)
    {
        return Some(msg.to_string());
    }
    if let Some(msg) = json.get("detail").and_then(Value::as_str) {
        return Some(msg.to_string());
    }
    if let Some(msg) = json.get("message").and_then(Value::as_str) {
        return Some(msg.to_string());
    }
    None
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AuthError {}

/// Result type for auth operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;
