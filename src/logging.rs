//! Tracing setup for the `bookshelf` binary.
//!
//! Human-readable events go to stderr, since stdout carries the JSON printed
//! by `query` and `mutate`. `--log-file` adds a JSON copy rotated daily.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "bookshelf.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbose`. Fails when the log file cannot be opened
/// or a subscriber is already installed.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let file_layer = log_file
        .map(open_log_file)
        .transpose()?
        .map(|appender| fmt::layer().with_writer(appender).with_ansi(false).json());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(file_layer)
        .try_init()
        .context("Failed to install the log subscriber")
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("bookshelf={level}")
}

/// Daily-rotated appender writing `<dir>/<name>.<date>` for `dir/name`.
fn open_log_file(path: &Path) -> Result<RollingFileAppender> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
