//! Dispatch module: the worker pool and its lifecycle coordinator.
//!
//! The `Dispatcher` wires a fixed pool of workers to a capacity-1 job
//! queue fed by the scanner, and owns the shutdown handshake: it signals
//! cancellation exactly once and then blocks until every worker has
//! acknowledged termination. Nothing is torn down (in particular no log
//! sink) while a worker might still be writing.
//!
//! Per-job failures are contained inside the worker that hit them; only
//! input-validation and enumeration errors escalate, and even those are
//! surfaced only after the handshake completes.
//!
//! # Example
//!
//! ```ignore
//! use remux_core::dispatch::{DispatchConfig, Dispatcher, InputSelection};
//! use remux_core::transcoder::{FfmpegTranscoder, NamingRule};
//!
//! let dispatcher = Dispatcher::new(
//!     DispatchConfig::default().with_workers(4),
//!     NamingRule::default(),
//!     FfmpegTranscoder::with_defaults(),
//! );
//!
//! let summary = dispatcher
//!     .run(InputSelection::directory("/media/films", true))
//!     .await?;
//! println!("dispatched {} jobs", summary.jobs_dispatched);
//! ```

mod config;
mod dispatcher;
mod error;
mod worker;

pub use config::DispatchConfig;
pub use dispatcher::{DispatchSummary, Dispatcher, InputSelection};
pub use error::DispatchError;
