use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log filter: {0}")]
    FilterError(#[from] tracing_subscriber::filter::ParseError),
}

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// CLI subcommands: the terminal is free
    Stderr,
    /// The board owns the terminal, so it can only log to a file
    File(&'a Path),
    Off,
}

/// Build the filter: `RUST_LOG` wins over the configured level
pub fn build_filter(level: &str) -> Result<EnvFilter, LogError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    Ok(filter)
}

/// Install the global subscriber. Calling twice keeps the first one.
pub fn init_logging(level: &str, target: LogTarget<'_>) -> Result<(), LogError> {
    let result = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(build_filter(level)?)
            .with_target(true)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LogError::OpenError {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(build_filter(level)?)
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    if let Err(err) = result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}
