//! Trait definitions for the transcoder module.

use async_trait::async_trait;
use std::path::Path;

use super::error::TranscodeError;

/// An external process capable of converting one media file.
///
/// The worker pool treats implementations as opaque: any error is logged
/// per job and never terminates a worker. Implementations must run the
/// job to completion; cancellation of the pool never interrupts an
/// in-flight transcode.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Returns the name of this transcoder implementation.
    fn name(&self) -> &str;

    /// Converts `input` into `output`, preserving codecs where possible.
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;

    /// Validates that the transcoder is properly configured and ready.
    async fn validate(&self) -> Result<(), TranscodeError>;
}
