//! Error types for the scanner module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while enumerating jobs.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The enumeration target does not exist.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// The directory-mode target is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A single-file target does not carry the required extension.
    #[error("{path} is not a .{expected} file")]
    WrongExtension { path: PathBuf, expected: String },

    /// A directory could not be listed during traversal.
    #[error("Failed to list directory: {path}")]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path could not be inspected during traversal.
    #[error("Failed to inspect path: {path}")]
    MetadataFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dispatch queue closed before enumeration finished.
    ///
    /// All receiver handles were dropped, meaning no worker will ever
    /// accept the job. This does not happen in normal operation.
    #[error("Dispatch queue closed before enumeration finished")]
    QueueClosed,
}

impl ScanError {
    /// Creates a read-dir failed error.
    pub fn read_dir_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::ReadDirFailed { path, source }
    }

    /// Creates a metadata failed error.
    pub fn metadata_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::MetadataFailed { path, source }
    }
}
