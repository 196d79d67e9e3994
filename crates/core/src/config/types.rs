use serde::{Deserialize, Serialize};

use crate::dispatch::DispatchConfig;
use crate::transcoder::{NamingRule, TranscoderConfig};

/// Top-level application configuration.
///
/// Every section has full defaults, so an empty file (or no file at all)
/// yields a working configuration: one worker remuxing `.mkv` to `.mp4`
/// with the `ffmpeg` found on the PATH.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// External transcoder settings.
    #[serde(default)]
    pub transcoder: TranscoderConfig,

    /// Source/target extension pairing.
    #[serde(default)]
    pub naming: NamingRule,

    /// Worker pool settings.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}
