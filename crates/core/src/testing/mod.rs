//! Testing utilities and mock implementations.
//!
//! Provides a scripted `Transcoder` so the dispatch pipeline can be
//! exercised end to end without ffmpeg on the machine.

mod mock_transcoder;

pub use mock_transcoder::{MockTranscoder, RecordedTranscode};
