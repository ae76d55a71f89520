//! Error types for jitt operations.
//!
//! This module defines [`JittError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Precondition failures (`NotInRepo`, `ConfigExists`, ...) are turned into
//!   a stderr message and a non-zero exit code by the command handlers
//! - `ConfigNotFound` and `ConfigParseError` stay distinct so callers can
//!   tell a missing document from a malformed one
//! - Use `anyhow::Error` (via `JittError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for jitt operations.
#[derive(Debug, Error)]
pub enum JittError {
    /// The working directory is not inside a Git repository.
    #[error("Not inside a Git repo")]
    NotInRepo,

    /// Configuration document not found at expected location.
    #[error("Configuration not found: {path} (run 'jitt init' first)")]
    ConfigNotFound { path: PathBuf },

    /// Configuration document already present.
    #[error("{} already exists, not overwriting.", path.display())]
    ConfigExists { path: PathBuf },

    /// Failed to parse configuration document.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Key is not one of the known configuration keys.
    #[error("Unknown config key: {key}")]
    UnknownConfigKey { key: String },

    /// The external git executable could not be started.
    #[error("Failed to run {program}: {source}")]
    GitLaunch {
        program: String,
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

/// Result type alias for jitt operations.
pub type Result<T> = std::result::Result<T, JittError>;
