//! File logging setup.
//!
//! The TUI owns the terminal, so log output goes to a daily-rolling file
//! under `<TIX_HOME>/logs` instead of stderr. RUST_LOG overrides the
//! configured filter.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::paths;

/// Initializes the global tracing subscriber with a rolling file writer.
///
/// Returns the appender guard; the caller must hold it for the lifetime of
/// the process or buffered log lines are lost on exit.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn init(default_filter: &str) -> Result<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_appender = tracing_appender::rolling::daily(paths::logs_dir(), "tix.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(guard)
}
