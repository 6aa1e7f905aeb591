//! File-backed tracing for the interactive session.
//!
//! The terminal owns stdout, so diagnostics go to a daily-rolling file under
//! the platform data directory. `QBX_LOG` controls the filter.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

const LOG_ENV: &str = "QBX_LOG";
const LOG_FILE_PREFIX: &str = "qbx.log";

/// Install the global subscriber.
///
/// The returned guard must stay alive for the life of the process so buffered
/// lines are flushed on exit.
pub fn initialize() -> Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init();

    Ok(guard)
}

fn log_dir() -> Result<PathBuf> {
    Ok(app_dirs::get_data_dir()?.join("logs"))
}
