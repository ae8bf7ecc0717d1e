//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A config file passed with `--config` does not exist.
    #[error("config file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The logging filter could not be parsed.
    #[error("invalid log level '{level}': {reason}")]
    LogFilter { level: String, reason: String },

    /// JSON output could not be produced.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
