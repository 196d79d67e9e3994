use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "remux")]
#[command(version, about = "Batch-remux media files and delete the originals")]
pub struct Cli {
    /// Single file to convert
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory to search for convertible files
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Search the directory recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Number of concurrent conversions (minimum 1)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Log at info level to stdout
    #[arg(short, long)]
    pub verbose: bool,

    /// Append logs to this file as well
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
