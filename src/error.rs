//! Error types for detection runs.
//!
//! This module defines [`DetectError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A registry key or value that is absent is not an error; the tree
//!   interface reports it as `None` and the readers skip it
//! - `DetectError` covers the few operations that can genuinely fail
//!   (launching the shell, loading a registry snapshot)
//! - Each detection step swallows its own errors after logging them, so one
//!   failing step never prevents the next one from running

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for detection operations.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The shell used for external queries could not be started.
    #[error("Failed to launch shell '{program}': {source}")]
    ShellLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Feeding queries to the shell or collecting its output failed.
    #[error("Shell session failed: {source}")]
    ShellIo {
        #[source]
        source: std::io::Error,
    },

    /// The registry snapshot file could not be read.
    #[error("Failed to read registry snapshot {path}: {source}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry snapshot file is not a valid key tree.
    #[error("Failed to parse registry snapshot at {path}: {message}")]
    SnapshotParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for detection operations.
pub type Result<T> = std::result::Result<T, DetectError>;
