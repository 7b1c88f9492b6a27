//! Non-interactive auth commands: login, signup, logout, whoami.
//!
//! These run the same validate-then-submit pipeline as the UI forms.

use anyhow::Result;
use tix_core::auth::{AuthClient, Credentials, Registration, validate_login, validate_signup};
use tix_core::config::Config;
use tix_core::session::{Session, mask_token};

/// Logs in and stores the session.
///
/// # Errors
/// Returns an error if validation fails or the request fails.
pub async fn login(config: &Config, identifier: String, password: String) -> Result<()> {
    let credentials = Credentials {
        identifier,
        password,
    };

    let errors = validate_login(&credentials);
    if !errors.is_empty() {
        anyhow::bail!("{}", errors.join(" "));
    }

    let client = AuthClient::new(config.resolve_base_url()?);
    let payload = client.login(&credentials).await?;
    tracing::info!(identifier = %credentials.identifier, "login succeeded");

    let session = Session::from_payload(&payload);
    session.save()?;

    match &session.username {
        Some(username) => println!("Logged in as {username}."),
        None => println!("Login successful."),
    }
    Ok(())
}

/// Creates a new account.
///
/// # Errors
/// Returns an error if validation fails or the request fails.
pub async fn signup(config: &Config, registration: Registration) -> Result<()> {
    let errors = validate_signup(&registration);
    if !errors.is_empty() {
        anyhow::bail!("{}", errors.join(" "));
    }

    let client = AuthClient::new(config.resolve_base_url()?);
    client.signup(&registration).await?;
    tracing::info!(username = %registration.username, "signup succeeded");

    println!("Sign-up successful! You can now log in with `tix login`.");
    Ok(())
}

/// Removes the stored session.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn logout() -> Result<()> {
    if Session::clear()? {
        println!("Logged out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}

/// Prints the stored session with the token masked.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn whoami() -> Result<()> {
    let Some(session) = Session::load()? else {
        println!("Not logged in.");
        return Ok(());
    };

    if let Some(username) = &session.username {
        println!("Username: {username}");
    }
    if let Some(email) = &session.email {
        println!("Email:    {email}");
    }
    if let Some(user_id) = session.user_id {
        println!("User id:  {user_id}");
    }
    if let Some(token) = &session.token {
        println!("Token:    {}", mask_token(token));
    }
    if let Some(saved_at) = session.saved_at {
        println!("Since:    {}", saved_at.format("%Y-%m-%d %H:%M UTC"));
    }
    Ok(())
}
