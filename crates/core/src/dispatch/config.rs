//! Configuration for the dispatch module.

use serde::{Deserialize, Serialize};

/// Configuration for the worker pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Number of concurrent conversion workers. Values below 1 are
    /// clamped to 1 at dispatch time.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_workers() -> usize {
    1
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

impl DispatchConfig {
    /// Sets the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}
