//! Errors raised while locating or preparing the server's data directory.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// The platform reports no per-user data directory.
    #[error("No data directory is available on this system")]
    NoDataDir,

    #[error("Expected a directory at {0}")]
    NotADirectory(PathBuf),

    #[error("Could not create {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// The write probe failed.
    #[error("Cannot write to {path}: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    #[error("An empty path was given for the database")]
    EmptyPath,
}
