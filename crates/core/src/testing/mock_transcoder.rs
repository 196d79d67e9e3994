//! Mock transcoder for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::transcoder::{TranscodeError, Transcoder};

/// A recorded transcode invocation for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedTranscode {
    /// Input path the worker submitted.
    pub input: PathBuf,
    /// Derived output path.
    pub output: PathBuf,
    /// Whether the invocation reported success.
    pub success: bool,
}

/// Mock implementation of the `Transcoder` trait.
///
/// Provides controllable behavior for testing:
/// - Records every invocation for assertions
/// - Fails deterministically on scripted input paths
/// - Optionally sleeps per job to exercise concurrency
///
/// Cloning yields a handle sharing the same recorded state, which lets a
/// test keep a reference after moving the mock into a dispatcher.
#[derive(Debug, Clone, Default)]
pub struct MockTranscoder {
    calls: Arc<RwLock<Vec<RecordedTranscode>>>,
    failing: Arc<RwLock<HashSet<PathBuf>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockTranscoder {
    /// Creates a new mock that succeeds on every input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle sharing this mock's state.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    /// Scripts a failure for the given input path.
    pub async fn fail_on(&self, input: impl Into<PathBuf>) {
        self.failing.write().await.insert(input.into());
    }

    /// Makes every transcode sleep for `delay` before completing.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// All invocations recorded so far, in call order per worker.
    pub async fn recorded(&self) -> Vec<RecordedTranscode> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl Transcoder for MockTranscoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }

        let success = !self.failing.read().await.contains(input);
        self.calls.write().await.push(RecordedTranscode {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            success,
        });

        if success {
            Ok(())
        } else {
            Err(TranscodeError::transcode_failed(
                format!("scripted failure for {}", input.display()),
                None,
            ))
        }
    }

    async fn validate(&self) -> Result<(), TranscodeError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_and_fails_on_script() {
        let mock = MockTranscoder::new();
        mock.fail_on("/bad.mkv").await;

        assert!(mock
            .transcode(Path::new("/good.mkv"), Path::new("/good.mp4"))
            .await
            .is_ok());
        assert!(mock
            .transcode(Path::new("/bad.mkv"), Path::new("/bad.mp4"))
            .await
            .is_err());

        let recorded = mock.recorded().await;
        assert_eq!(recorded.len(), 2);
        assert!(recorded[0].success);
        assert!(!recorded[1].success);
        assert_eq!(recorded[1].output, PathBuf::from("/bad.mp4"));
    }

    #[tokio::test]
    async fn test_handle_shares_state() {
        let mock = MockTranscoder::new();
        let handle = mock.handle();

        mock.transcode(Path::new("/a.mkv"), Path::new("/a.mp4"))
            .await
            .unwrap();
        assert_eq!(handle.recorded().await.len(), 1);
    }
}
