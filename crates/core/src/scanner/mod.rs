//! Scanner module: discovers files to convert and feeds the dispatch queue.
//!
//! The scanner is the single producer of the worker pool. It either
//! validates one explicit file or walks a directory tree (optionally
//! recursive), sending every path that carries the configured source
//! extension into the queue. Sends block while all workers are busy;
//! that backpressure is intentional and keeps the walk from running
//! arbitrarily far ahead of the conversions.
//!
//! Directory entries are sorted by name at every level, so emission order
//! is deterministic for a fixed filesystem state.

mod error;

pub use error::ScanError;

use futures::future::{BoxFuture, FutureExt};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::mpsc;
use tracing::debug;

/// A validated enumeration target.
#[derive(Debug, Clone)]
pub enum ScanTarget {
    /// Convert one explicit file.
    File(PathBuf),
    /// Convert matching files under a directory.
    Directory { path: PathBuf, recursive: bool },
}

/// Discovers convertible files and emits them onto the dispatch queue.
pub struct Scanner {
    suffix: String,
    source_ext: String,
}

impl Scanner {
    /// Creates a scanner matching files with the given extension (no dot).
    pub fn new(source_ext: impl Into<String>) -> Self {
        let source_ext = source_ext.into();
        Self {
            suffix: format!(".{}", source_ext),
            source_ext,
        }
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    /// Enumerates jobs for `target`, sending each match into `queue`.
    ///
    /// Returns the number of jobs emitted. Sends block until a worker is
    /// ready to accept the job.
    pub async fn enumerate(
        &self,
        target: &ScanTarget,
        queue: &mpsc::Sender<PathBuf>,
    ) -> Result<usize, ScanError> {
        match target {
            ScanTarget::File(path) => self.scan_file(path, queue).await,
            ScanTarget::Directory { path, recursive } => {
                let meta = fs::metadata(path).await.map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        ScanError::NotFound {
                            path: path.to_path_buf(),
                        }
                    } else {
                        ScanError::metadata_failed(path.to_path_buf(), e)
                    }
                })?;
                if !meta.is_dir() {
                    return Err(ScanError::NotADirectory {
                        path: path.to_path_buf(),
                    });
                }
                self.scan_dir(path, *recursive, queue).await
            }
        }
    }

    async fn scan_file(
        &self,
        path: &Path,
        queue: &mpsc::Sender<PathBuf>,
    ) -> Result<usize, ScanError> {
        if !self.matches(path) {
            return Err(ScanError::WrongExtension {
                path: path.to_path_buf(),
                expected: self.source_ext.clone(),
            });
        }

        queue
            .send(path.to_path_buf())
            .await
            .map_err(|_| ScanError::QueueClosed)?;
        Ok(1)
    }

    fn scan_dir<'a>(
        &'a self,
        dir: &'a Path,
        recursive: bool,
        queue: &'a mpsc::Sender<PathBuf>,
    ) -> BoxFuture<'a, Result<usize, ScanError>> {
        async move {
            let mut read_dir = fs::read_dir(dir)
                .await
                .map_err(|e| ScanError::read_dir_failed(dir.to_path_buf(), e))?;

            let mut entries = Vec::new();
            while let Some(entry) = read_dir
                .next_entry()
                .await
                .map_err(|e| ScanError::read_dir_failed(dir.to_path_buf(), e))?
            {
                entries.push(entry);
            }
            // Sorted so emission order is stable run-to-run.
            entries.sort_by_key(|entry| entry.file_name());

            let mut emitted = 0;
            for entry in entries {
                let path = entry.path();
                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| ScanError::metadata_failed(path.clone(), e))?;

                if file_type.is_dir() {
                    if recursive {
                        emitted += self.scan_dir(&path, recursive, queue).await?;
                    }
                    continue;
                }

                if self.matches(&path) {
                    debug!("queueing {}", path.display());
                    queue.send(path).await.map_err(|_| ScanError::QueueClosed)?;
                    emitted += 1;
                }
            }

            Ok(emitted)
        }
        .boxed()
    }
}
