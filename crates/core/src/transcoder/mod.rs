//! Transcoder module for remuxing media files.
//!
//! This module provides the `Transcoder` trait and the FFmpeg-backed
//! implementation used to remux a single media file without re-encoding.
//! The trait is the seam between the worker pool and the external process:
//! tests substitute a mock, production uses `FfmpegTranscoder`.
//!
//! # Example
//!
//! ```ignore
//! use remux_core::transcoder::{FfmpegTranscoder, NamingRule, Transcoder};
//!
//! let transcoder = FfmpegTranscoder::with_defaults();
//!
//! // Check ffmpeg is available
//! transcoder.validate().await?;
//!
//! let naming = NamingRule::default(); // .mkv -> .mp4
//! let input = Path::new("/media/film.mkv");
//! let output = naming.output_path(input);
//!
//! transcoder.transcode(input, &output).await?;
//! ```

mod config;
mod error;
mod ffmpeg;
mod naming;
mod traits;

pub use config::TranscoderConfig;
pub use error::TranscodeError;
pub use ffmpeg::FfmpegTranscoder;
pub use naming::NamingRule;
pub use traits::Transcoder;
