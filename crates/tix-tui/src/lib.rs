//! Full-screen TUI implementation for tix.

pub mod common;
pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use tix_core::config::Config;
use tix_core::session::Session;

/// Runs the interactive UI.
///
/// # Errors
/// Returns an error if no terminal is attached or setup fails.
pub async fn run_interactive(config: &Config) -> Result<()> {
    // The UI requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive UI requires a terminal.\n\
             Use `tix login`/`tix signup` for non-interactive use."
        );
    }

    let base_url = config.resolve_base_url()?;

    let session = match Session::load() {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable session file");
            None
        }
    };

    let mut runtime = TuiRuntime::new(base_url, session)?;
    runtime.run()
}
