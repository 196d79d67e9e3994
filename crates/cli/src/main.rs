mod cli;

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use remux_core::{
    load_config, validate_config, Config, Dispatcher, FfmpegTranscoder, InputSelection, Transcoder,
};

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize logging: stdout always, plus an optional append-mode file.
///
/// The default level is warn so unattended runs stay quiet; `--verbose`
/// raises it to info and `RUST_LOG` overrides both.
fn init_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_level.into());

    let file_layer = match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(workers) = cli.workers {
        config.dispatch.workers = workers;
    }

    validate_config(&config).context("Configuration validation failed")?;

    let transcoder = FfmpegTranscoder::new(config.transcoder.clone());
    if let Err(e) = transcoder.validate().await {
        // Not fatal: a missing binary surfaces per job inside the workers,
        // logged and contained there.
        warn!("Transcoder preflight failed: {}", e);
    }

    let dispatcher = Dispatcher::new(config.dispatch.clone(), config.naming.clone(), transcoder);
    let selection = InputSelection {
        file: cli.file,
        directory: cli.dir,
        recursive: cli.recursive,
    };

    let summary = dispatcher.run(selection).await?;
    info!(
        "Finished: {} job(s) dispatched across {} worker(s)",
        summary.jobs_dispatched, summary.workers
    );

    Ok(())
}
