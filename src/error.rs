//! Error types for readiness operations.
//!
//! This module defines [`ReadinessError`], the error type used outside the
//! check boundary (config loading, snapshot parsing, command dispatch), and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks never return errors; an absent or unreadable input becomes a
//!   `warn` result inside the check itself
//! - Use `ReadinessError` for failures that stop a report from being built
//! - Use `anyhow::Error` (via `ReadinessError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for readiness operations.
#[derive(Debug, Error)]
pub enum ReadinessError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse a site snapshot file.
    #[error("Failed to parse site snapshot at {path}: {message}")]
    SnapshotParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for readiness operations.
pub type Result<T> = std::result::Result<T, ReadinessError>;
