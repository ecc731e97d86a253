//! Error types for envdo.
//!
//! This module defines [`EnvdoError`], the error type used throughout the
//! launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every error ends the invocation; nothing is retried
//! - A child process exiting non-zero is not an error, its code is passed through
//! - Use `anyhow::Error` (via `EnvdoError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Usage line printed when no command is given.
pub const USAGE: &str = "Usage: envdo [-f envfile] command [args...]";

/// Core error type for envdo operations.
#[derive(Debug, Error)]
pub enum EnvdoError {
    /// No command was supplied on the command line.
    #[error("{}", USAGE)]
    Usage,

    /// The env file could not be opened or read.
    #[error("Error loading environment file {}: {source}", .path.display())]
    EnvFileLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The shell could not be started or waited on.
    #[error("Failed to execute command: {source}")]
    Spawn {
        shell: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EnvdoError {
    /// Exit status the launcher reports for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the message belongs on stdout rather than stderr.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage)
    }
}

/// Result type alias for envdo operations.
pub type Result<T> = std::result::Result<T, EnvdoError>;
