//! Error types for the transcoder module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a single file.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// FFmpeg binary not found.
    #[error("FFmpeg not found at path: {path}")]
    FfmpegNotFound { path: PathBuf },

    /// The external process failed to produce the output file.
    #[error("Transcode failed: {reason}")]
    TranscodeFailed {
        reason: String,
        stderr: Option<String>,
    },

    /// The source file could not be removed after a successful transcode.
    ///
    /// The output file already exists on disk at this point; there is no
    /// rollback of the conversion.
    #[error("Failed to remove source file: {path}")]
    RemovalFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while running the external process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscodeError {
    /// Creates a transcode failed error with optional stderr output.
    pub fn transcode_failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::TranscodeFailed {
            reason: reason.into(),
            stderr,
        }
    }

    /// Creates a removal failed error.
    pub fn removal_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::RemovalFailed { path, source }
    }
}
