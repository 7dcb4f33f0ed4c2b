//! Error types for devtask operations.
//!
//! This module defines [`DevtaskError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Dispatch itself never fails: a tool that exits non-zero is not an error
//! - `DevtaskError` covers what can stop the program before dispatch
//!   (a bad `devtask.yml`) and programs that cannot be spawned
//! - Use `anyhow::Error` (via `DevtaskError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devtask operations.
#[derive(Debug, Error)]
pub enum DevtaskError {
    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An external program could not be started at all.
    #[error("{command}: {source}")]
    SpawnFailed {
        command: String,
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

/// Result type alias for devtask operations.
pub type Result<T> = std::result::Result<T, DevtaskError>;
