use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Autosync - mirror a directory tree with rsync on every change
#[derive(Parser, Debug)]
#[command(name = "autosync")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Runs until interrupted; press Ctrl+C to stop.")]
pub struct Cli {
    /// Local directory tree to watch (recursive)
    pub local_path: PathBuf,

    /// Sync destination: local path or remote-shell address (user@host:/path)
    pub remote_path: String,

    /// Watcher poll interval in seconds (watch library default if unset)
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub observer_timeout: Option<Duration>,

    /// Extra rsync flags, split on whitespace, appended to every invocation
    #[arg(long, value_name = "FLAGS", default_value = "", allow_hyphen_values = true)]
    pub rsync_options: String,

    /// Output events as NDJSON for CI
    #[arg(long)]
    pub json: bool,

    /// When to use colored output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,
}

fn parse_seconds(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw.parse().map_err(|e| format!("invalid number: {e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}
