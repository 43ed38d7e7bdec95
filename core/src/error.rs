//! Error types for the netbaseline-core library.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for netbaseline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning, persisting or loading baselines.
#[derive(Error, Debug)]
pub enum Error {
    /// The external scanner executable could not be located.
    #[error("{program} is not installed.\nInstall it using:\n{hint}")]
    MissingDependency { program: String, hint: String },

    /// Failed to execute a system command.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// The scanner did not finish within the configured timeout.
    #[error("Scan timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Baseline file does not exist.
    #[error("Baseline file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Baseline file content is not a valid snapshot.
    #[error("Failed to parse baseline: {0}")]
    ParseError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
