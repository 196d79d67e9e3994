//! Lifecycle coordinator for the worker pool.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, Mutex};
use tracing::{debug, info};

use crate::scanner::{ScanTarget, Scanner};
use crate::transcoder::{NamingRule, Transcoder};

use super::config::DispatchConfig;
use super::error::DispatchError;
use super::worker::Worker;

/// The input selection supplied by the caller, prior to validation.
///
/// Exactly one of `file` and `directory` must be set; the dispatcher
/// rejects anything else before a single worker is started.
#[derive(Debug, Clone, Default)]
pub struct InputSelection {
    /// Single file to convert.
    pub file: Option<PathBuf>,
    /// Directory to search for convertible files.
    pub directory: Option<PathBuf>,
    /// Whether to descend into subdirectories in directory mode.
    pub recursive: bool,
}

impl InputSelection {
    /// Selects a single file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Default::default()
        }
    }

    /// Selects a directory.
    pub fn directory(path: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            directory: Some(path.into()),
            recursive,
            ..Default::default()
        }
    }

    fn into_target(self) -> Result<ScanTarget, DispatchError> {
        match (self.file, self.directory) {
            (Some(_), Some(_)) => Err(DispatchError::ConflictingInput),
            (None, None) => Err(DispatchError::NoInput),
            (Some(file), None) => Ok(ScanTarget::File(file)),
            (None, Some(path)) => Ok(ScanTarget::Directory {
                path,
                recursive: self.recursive,
            }),
        }
    }
}

/// Outcome of a completed dispatch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Number of jobs emitted by the scanner.
    pub jobs_dispatched: usize,
    /// Effective worker count after clamping.
    pub workers: usize,
}

/// Coordinates the scanner, the worker pool, and the shutdown handshake.
pub struct Dispatcher<T: Transcoder + 'static> {
    config: DispatchConfig,
    naming: NamingRule,
    transcoder: Arc<T>,
}

impl<T: Transcoder + 'static> Dispatcher<T> {
    /// Creates a new dispatcher.
    pub fn new(config: DispatchConfig, naming: NamingRule, transcoder: T) -> Self {
        Self {
            config,
            naming,
            transcoder: Arc::new(transcoder),
        }
    }

    /// Runs one batch to completion.
    ///
    /// Starts the worker pool, drives the scanner on the calling task, and
    /// regardless of the scanner's outcome signals cancellation exactly
    /// once and waits for every worker's acknowledgment before returning.
    /// A fatal error is therefore only surfaced after the handshake.
    pub async fn run(&self, selection: InputSelection) -> Result<DispatchSummary, DispatchError> {
        let target = selection.into_target();

        let workers = self.config.workers.max(1);
        // Capacity 1 keeps the scanner at most one job ahead of the pool.
        let (queue_tx, queue_rx) = mpsc::channel::<PathBuf>(1);
        let queue = Arc::new(Mutex::new(queue_rx));
        let (shutdown_tx, _) = broadcast::channel::<()>(1);
        let (done_tx, mut done_rx) = mpsc::channel::<()>(workers);

        info!("Starting {} conversion worker(s)", workers);
        for _ in 0..workers {
            let worker = Worker::new(
                Arc::clone(&queue),
                shutdown_tx.subscribe(),
                done_tx.clone(),
                Arc::clone(&self.transcoder),
                self.naming.clone(),
            );
            tokio::spawn(worker.listen());
        }
        drop(done_tx);

        // Validation happens after the pool is up so the handshake below
        // covers every exit path, fatal input errors included.
        let result = match target {
            Ok(target) => {
                let scanner = Scanner::new(self.naming.source_ext.clone());
                scanner
                    .enumerate(&target, &queue_tx)
                    .await
                    .map_err(DispatchError::from)
            }
            Err(e) => Err(e),
        };

        // One-way transition to cancelled: close the queue, then signal.
        drop(queue_tx);
        let _ = shutdown_tx.send(());

        let mut acknowledged = 0;
        while acknowledged < workers {
            match done_rx.recv().await {
                Some(()) => acknowledged += 1,
                None => break,
            }
        }
        debug!("{} of {} worker(s) acknowledged shutdown", acknowledged, workers);

        let jobs_dispatched = result?;
        info!(
            "Dispatched {} job(s) across {} worker(s)",
            jobs_dispatched, workers
        );
        Ok(DispatchSummary {
            jobs_dispatched,
            workers,
        })
    }
}
