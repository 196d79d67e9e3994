pub mod config;
pub mod dispatch;
pub mod scanner;
pub mod testing;
pub mod transcoder;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError,
};
pub use dispatch::{
    DispatchConfig, DispatchError, DispatchSummary, Dispatcher, InputSelection,
};
pub use scanner::{ScanError, ScanTarget, Scanner};
pub use transcoder::{
    FfmpegTranscoder, NamingRule, TranscodeError, Transcoder, TranscoderConfig,
};
