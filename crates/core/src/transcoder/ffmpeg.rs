//! FFmpeg-based transcoder implementation.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use super::config::TranscoderConfig;
use super::error::TranscodeError;
use super::traits::Transcoder;

/// FFmpeg-based transcoder performing a codec-preserving remux.
pub struct FfmpegTranscoder {
    config: TranscoderConfig,
}

impl FfmpegTranscoder {
    /// Creates a new FFmpeg transcoder with the given configuration.
    pub fn new(config: TranscoderConfig) -> Self {
        Self { config }
    }

    /// Creates a transcoder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(TranscoderConfig::default())
    }

    /// Builds ffmpeg arguments for a stream-copy remux.
    fn build_remux_args(&self, input: &Path, output: &Path) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(), // Overwrite output
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-codec".to_string(),
            "copy".to_string(),
            "-loglevel".to_string(),
            self.config.ffmpeg_log_level.clone(),
        ];

        args.extend(self.config.extra_ffmpeg_args.iter().cloned());
        args.push(output.to_string_lossy().to_string());

        args
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let args = self.build_remux_args(input, output);
        debug!("running {} {}", self.config.ffmpeg_path.display(), args.join(" "));

        let result = Command::new(&self.config.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TranscodeError::FfmpegNotFound {
                        path: self.config.ffmpeg_path.clone(),
                    }
                } else {
                    TranscodeError::Io(e)
                }
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            return Err(TranscodeError::transcode_failed(
                format!("ffmpeg exited with code: {:?}", result.status.code()),
                if stderr.is_empty() { None } else { Some(stderr) },
            ));
        }

        Ok(())
    }

    async fn validate(&self) -> Result<(), TranscodeError> {
        let result = Command::new(&self.config.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .await;

        match result {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => Err(TranscodeError::transcode_failed(
                format!(
                    "ffmpeg -version exited with code: {:?}",
                    output.status.code()
                ),
                None,
            )),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TranscodeError::FfmpegNotFound {
                    path: self.config.ffmpeg_path.clone(),
                })
            }
            Err(e) => Err(TranscodeError::Io(e)),
        }
    }
}
