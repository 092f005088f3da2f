//! Tracing setup for the backend binary.
//!
//! Logs always go to stdout. When [`LogConfig::file_dir`] is set they are also
//! written, without ANSI colours, to a daily rolling `learn-words.*.log` file.

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogConfig, DEFAULT_LOG_FILTER};

const LOG_FILE_PREFIX: &str = "learn-words";
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug, Error)]
pub enum LogFileError {
    #[error("failed to create log directory: {0}")]
    Dir(#[from] std::io::Error),
    #[error(transparent)]
    Appender(#[from] InitError),
}

/// Keeps the non-blocking file writer flushing until dropped.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

/// Parses `directives`, falling back to [`DEFAULT_LOG_FILTER`] when they are
/// malformed.
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("invalid log filter {directives:?} ({err}), using {DEFAULT_LOG_FILTER}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Daily rolling writer under `dir`, creating the directory if needed.
pub fn rolling_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard), LogFileError> {
    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Installs the global subscriber. Hold the returned guard for the lifetime
/// of the process or buffered file output is lost.
pub fn init_tracing(config: &LogConfig) -> Option<FileLogGuard> {
    let file = config.file_dir.as_deref().and_then(|dir| match rolling_writer(dir) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("file logging disabled for {}: {err}", dir.display());
            None
        }
    });
    let (file_writer, guard) = file.unzip();

    tracing_subscriber::registry()
        .with(env_filter(&config.filter))
        .with(fmt::layer().with_target(true))
        .with(file_writer.map(|writer| {
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
        }))
        .init();

    guard.map(|guard| FileLogGuard { _guard: guard })
}
