//! Authentication against the ticketing backend.
//!
//! - [`types`] - request/response records and the error taxonomy
//! - [`validate`] - pure, exhaustive form validation
//! - [`client`] - HTTP client for the login/signup endpoints

pub mod client;
pub mod types;
pub mod validate;

pub use client::AuthClient;
pub use types::{AuthError, AuthErrorKind, AuthResult, Credentials, Operation, Registration};
pub use validate::{validate_login, validate_signup};
