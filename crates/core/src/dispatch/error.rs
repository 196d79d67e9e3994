//! Error types for the dispatch module.

use thiserror::Error;

use crate::scanner::ScanError;

/// Fatal errors surfaced by the dispatcher.
///
/// All of these are pre-dispatch or enumeration failures; per-job
/// conversion errors never reach this type.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Neither a file nor a directory was supplied.
    #[error("No input supplied: expected a file or a directory")]
    NoInput,

    /// Both a file and a directory were supplied.
    #[error("Too many inputs supplied: choose either a file or a directory")]
    ConflictingInput,

    /// Job enumeration failed.
    #[error(transparent)]
    Scan(#[from] ScanError),
}
