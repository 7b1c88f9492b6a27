//! Config subcommands.

use anyhow::Result;
use tix_core::config::{Config, paths};

/// Prints the config file path.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

/// Writes the default config file if absent.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn init() -> Result<()> {
    let path = paths::config_path();
    if Config::init_default()? {
        println!("Created {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}

/// Persists the backend base URL to the config file.
///
/// # Errors
/// Returns an error if the URL is invalid or the write fails.
pub fn set_url(url: &str) -> Result<()> {
    Config::save_base_url(url)?;
    println!("Base URL set to {url}");
    Ok(())
}
