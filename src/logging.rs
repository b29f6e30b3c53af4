use std::io::IsTerminal;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Map `-v` occurrences to a filter directive, deferring to the configured
/// level when none were given.
pub fn level_for(verbose: u8, config: &LoggingConfig) -> &str {
    match verbose {
        0 => config.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over everything; the CLI
/// `--log-file` wins over `logging.file`; otherwise logs go to stderr so
/// stdout carries only generated text.
pub fn init(verbose: u8, log_file: Option<PathBuf>, config: &LoggingConfig) -> anyhow::Result<()> {
    let level = level_for(verbose, config);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let resolved_log = log_file.or_else(|| config.file.clone());

    if let Some(log_path) = resolved_log {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
