//! Diagnostics setup
//!
//! Everything goes to stderr so stdout stays parseable. `init` additionally
//! mirrors its diagnostics into the server log file named by the config.

use anyhow::{Context, Result};
use daytona_logs::LogTree;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::subscriber::DefaultGuard;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("daytona_server={level},daytona_core={level},daytona_logs={level}").into()
    })
}

/// Install the process-wide stderr subscriber
pub fn init(verbose: u8) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

/// Guards that keep the file subscriber alive; drop to flush and restore
pub struct FileLogging {
    _default: DefaultGuard,
    _worker: WorkerGuard,
}

/// Route diagnostics to stderr and `log_file` until the returned guard drops
pub fn with_file(verbose: u8, log_file: &Path) -> Result<FileLogging> {
    LogTree::ensure_parent(log_file)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open server log {}", log_file.display()))?;

    let (writer, worker) = tracing_appender::non_blocking(file);

    let default = tracing_subscriber::registry()
        .with(env_filter(verbose.max(1)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .set_default();

    Ok(FileLogging {
        _default: default,
        _worker: worker,
    })
}
