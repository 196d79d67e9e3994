//! Worker event loop.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, Mutex};
use tracing::{error, info};

use crate::transcoder::{NamingRule, TranscodeError, Transcoder};

/// Receiver end of the dispatch queue, shared by all workers.
///
/// The mutex hands each queued job to exactly one worker.
pub(crate) type SharedQueue = Arc<Mutex<mpsc::Receiver<PathBuf>>>;

/// One unit of the worker pool.
///
/// Runs an event loop with two wake conditions: a job arriving on the
/// queue, or the shutdown signal. Once the shutdown branch wins the
/// worker sends a single acknowledgment and terminates; a conversion
/// failure never terminates a worker.
pub(crate) struct Worker<T: Transcoder> {
    queue: SharedQueue,
    shutdown: broadcast::Receiver<()>,
    done: mpsc::Sender<()>,
    transcoder: Arc<T>,
    naming: NamingRule,
}

impl<T: Transcoder + 'static> Worker<T> {
    pub(crate) fn new(
        queue: SharedQueue,
        shutdown: broadcast::Receiver<()>,
        done: mpsc::Sender<()>,
        transcoder: Arc<T>,
        naming: NamingRule,
    ) -> Self {
        Self {
            queue,
            shutdown,
            done,
            transcoder,
            naming,
        }
    }

    /// Runs until cancellation is observed, then acknowledges and exits.
    ///
    /// Queue closure counts as cancellation observed: the dispatcher drops
    /// the producer handle as the first step of the same one-way shutdown
    /// transition that the broadcast signal announces.
    pub(crate) async fn listen(mut self) {
        loop {
            tokio::select! {
                job = Self::next_job(&self.queue) => match job {
                    Some(path) => self.process(path).await,
                    None => break,
                },
                _ = self.shutdown.recv() => {
                    // The signal arrives only after the producer handle is
                    // dropped, so anything still buffered is an emitted job
                    // no new receive will ever pick up. Drain it before
                    // acknowledging.
                    self.drain_buffered().await;
                    break;
                }
            }
        }

        // Exactly one acknowledgment per worker; the dispatcher counts
        // these before tearing anything down.
        let _ = self.done.send(()).await;
    }

    async fn process(&self, path: PathBuf) {
        if let Err(e) = self.convert(&path).await {
            error!("Error converting {}: {}", path.display(), e);
        }
    }

    /// Converts whatever the queue still buffers without waiting for more.
    async fn drain_buffered(&self) {
        loop {
            let job = self.queue.lock().await.try_recv();
            match job {
                Ok(path) => self.process(path).await,
                Err(_) => break,
            }
        }
    }

    /// Receives the next job while holding the shared queue lock.
    ///
    /// Cancel-safe: `recv` never takes a value it does not return, so a
    /// job is never lost when the shutdown branch wins the race.
    async fn next_job(queue: &Mutex<mpsc::Receiver<PathBuf>>) -> Option<PathBuf> {
        queue.lock().await.recv().await
    }

    /// The conversion task: transcode one file, then remove the source.
    async fn convert(&self, input: &Path) -> Result<(), TranscodeError> {
        let output = self.naming.output_path(input);
        info!("Converting {} to {}", input.display(), output.display());
        self.transcoder.transcode(input, &output).await?;

        info!("Removing {}", input.display());
        tokio::fs::remove_file(input)
            .await
            .map_err(|e| TranscodeError::removal_failed(input.to_path_buf(), e))
    }
}
