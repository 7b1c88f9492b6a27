//! HTTP client for the backend auth endpoints.
//!
//! Thin wrapper over reqwest: serializes the validated record, POSTs it,
//! and normalizes every failure into a single [`AuthError`]. Success
//! payloads are opaque JSON passed through untouched.

use serde::Serialize;
use serde_json::Value;

use super::types::{AuthError, AuthResult, Credentials, Operation, Registration};
use crate::config::DEFAULT_BASE_URL;

/// Standard User-Agent header for tix API requests.
pub const USER_AGENT: &str = concat!("tix/", env!("CARGO_PKG_VERSION"));

const LOGIN_PATH: &str = "/auth/login";
const SIGNUP_PATH: &str = "/auth/signup";

/// Auth API client.
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    /// Creates a new auth client for the given base URL.
    ///
    /// # Panics
    /// - In test builds (`#[cfg(test)]`), panics if `base_url` is the production API.
    /// - At runtime, panics if `TIX_BLOCK_REAL_API=1` and `base_url` is the production API.
    ///
    /// This prevents tests from accidentally making real network requests.
    /// Use the `TIX_BASE_URL` env var or config to point to a mock server.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        // Compile-time guard for unit tests
        #[cfg(test)]
        if base_url == DEFAULT_BASE_URL {
            panic!(
                "Tests must not use the production ticketing API!\n\
                 Set TIX_BASE_URL to a mock server (e.g., wiremock).\n\
                 Found base_url: {base_url}"
            );
        }

        // Runtime guard for integration tests (set TIX_BLOCK_REAL_API=1 in test harness)
        #[cfg(not(test))]
        if std::env::var("TIX_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && base_url == DEFAULT_BASE_URL
        {
            panic!(
                "TIX_BLOCK_REAL_API=1 but trying to use the production ticketing API!\n\
                 Set TIX_BASE_URL to a mock server.\n\
                 Found base_url: {base_url}"
            );
        }

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Returns the base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Logs in with the given credentials.
    ///
    /// Returns the backend's opaque success payload.
    ///
    /// # Errors
    /// Returns an error if no response was received, the status was non-2xx,
    /// or the success body was not JSON.
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<Value> {
        self.post_json(LOGIN_PATH, credentials, Operation::Login)
            .await
    }

    /// Registers a new account.
    ///
    /// Returns the backend's opaque success payload.
    ///
    /// # Errors
    /// Returns an error if no response was received, the status was non-2xx,
    /// or the success body was not JSON.
    pub async fn signup(&self, registration: &Registration) -> AuthResult<Value> {
        self.post_json(SIGNUP_PATH, registration, Operation::Signup)
            .await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        operation: Operation,
    ) -> AuthResult<Value> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(operation = %operation, error = %e, "no response received");
                AuthError::network()
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::debug!(operation = %operation, error = %e, "failed to read response body");
            AuthError::network()
        })?;

        if !status.is_success() {
            tracing::debug!(operation = %operation, status = status.as_u16(), body = %text, "request failed");
            return Err(AuthError::http_status(status.as_u16(), &text, operation));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(operation = %operation, error = %e, "success body was not JSON");
            AuthError::parse(operation, text.clone())
        })
    }
}
