//! Error types for revision-plate operations.
//!
//! This module defines [`RevisionPlateError`], the error type for startup and
//! command failures, and a [`Result`] type alias for convenience.
//!
//! Per-request failures are [`RevisionError`](crate::revision::RevisionError)
//! values and never surface here.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for revision-plate operations.
#[derive(Debug, Error)]
pub enum RevisionPlateError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Could not bind the listen address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
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

/// Result type alias for revision-plate operations.
pub type Result<T> = std::result::Result<T, RevisionPlateError>;
