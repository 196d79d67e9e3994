//! Output path derivation for converted files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maps an input path to its output path by swapping extensions.
///
/// The first occurrence of `.{source_ext}` in the path string is replaced
/// with `.{target_ext}`, matching the behavior of a plain suffix swap for
/// normally-named files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingRule {
    /// Extension of files selected for conversion, without the leading dot.
    #[serde(default = "default_source_ext")]
    pub source_ext: String,

    /// Extension of converted files, without the leading dot.
    #[serde(default = "default_target_ext")]
    pub target_ext: String,
}

fn default_source_ext() -> String {
    "mkv".to_string()
}

fn default_target_ext() -> String {
    "mp4".to_string()
}

impl Default for NamingRule {
    fn default() -> Self {
        Self {
            source_ext: default_source_ext(),
            target_ext: default_target_ext(),
        }
    }
}

impl NamingRule {
    /// Creates a rule converting `source_ext` files into `target_ext` files.
    pub fn new(source_ext: impl Into<String>, target_ext: impl Into<String>) -> Self {
        Self {
            source_ext: source_ext.into(),
            target_ext: target_ext.into(),
        }
    }

    /// Derives the output path for `input`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let source = format!(".{}", self.source_ext);
        let target = format!(".{}", self.target_ext);
        PathBuf::from(input.to_string_lossy().replacen(&source, &target, 1))
    }
}
