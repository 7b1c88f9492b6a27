//! Pure form validation for login and signup.
//!
//! Validation is exhaustive, not short-circuiting: every violated rule is
//! collected, in field order, so the user sees all problems at once. The
//! returned messages are display-ready sentences.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Credentials, Registration};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Basic `local@domain.tld` shape: non-whitespace, `@`, non-whitespace,
/// `.`, non-whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

/// 10 to 15 decimal digits, nothing else.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10,15}$").expect("phone regex compiles"));

/// Validates login credentials.
///
/// Returns all violated rules, in field order. Empty means valid.
pub fn validate_login(credentials: &Credentials) -> Vec<String> {
    let mut errors = Vec::new();

    if credentials.identifier.trim().is_empty() {
        errors.push("Username or email is required.".to_string());
    }
    if credentials.password.len() < MIN_PASSWORD_LEN {
        errors.push(password_too_short());
    }

    errors
}

/// Validates a signup registration record.
///
/// Returns all violated rules, in field order. Empty means valid.
pub fn validate_signup(registration: &Registration) -> Vec<String> {
    let mut errors = Vec::new();

    if !EMAIL_RE.is_match(&registration.email) {
        errors.push("Invalid email address.".to_string());
    }
    if registration.username.trim().is_empty() {
        errors.push("Username is required.".to_string());
    }
    if !PHONE_RE.is_match(&registration.phone) {
        errors.push("Invalid phone number. It should contain 10 to 15 digits.".to_string());
    }
    if registration.first_name.trim().is_empty() {
        errors.push("First name is required.".to_string());
    }
    if registration.last_name.trim().is_empty() {
        errors.push("Last name is required.".to_string());
    }
    if registration.company.trim().is_empty() {
        errors.push("Company name is required.".to_string());
    }
    if registration.password.len() < MIN_PASSWORD_LEN {
        errors.push(password_too_short());
    }

    errors
}

fn password_too_short() -> String {
    "Password must be at least 6 characters long.".to_string()
}
