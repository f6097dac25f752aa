//! Log sinks: stderr for the operator, `pipeline.log` for the run record.

use crate::config::LoggingConfig;
use crate::error::{CliError, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// File name of the persistent run log under `logging.base_dir`
pub const RUN_LOG_FILE: &str = "pipeline.log";

fn configured_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Create `base_dir` and open its run log for appending
pub fn open_run_log(config: &LoggingConfig) -> Result<(File, PathBuf)> {
    let dir = Path::new(&config.base_dir);
    fs::create_dir_all(dir)?;
    let path = dir.join(RUN_LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Stderr and run-log layers over one registry
///
/// `RUST_LOG` overrides the configured level on stderr only; the run log
/// always records at `logging.level`.
pub fn subscriber(
    config: &LoggingConfig,
    run_log: File,
) -> impl Subscriber + Send + Sync + 'static {
    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| configured_filter(&config.level));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);
    let file = fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(run_log))
        .with_filter(configured_filter(&config.level));

    tracing_subscriber::registry().with(stderr).with(file)
}

/// Install the global subscriber; returns the run log path
pub fn init_logging(config: &LoggingConfig) -> Result<PathBuf> {
    let (run_log, path) = open_run_log(config)?;
    subscriber(config, run_log)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;
    tracing::debug!(path = %path.display(), "Run log attached");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> LoggingConfig {
        LoggingConfig {
            base_dir: dir.join("nested/logs").to_string_lossy().into_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_run_log_creates_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let (_, path) = open_run_log(&config).unwrap();
        assert_eq!(path, dir.path().join("nested/logs").join(RUN_LOG_FILE));
        assert!(path.is_file());
    }

    #[test]
    fn test_run_log_records_at_configured_level() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let (file, path) = open_run_log(&config).unwrap();

        tracing::subscriber::with_default(subscriber(&config, file), || {
            tracing::info!(stage = "02_chunking", "Stage started");
            tracing::trace!("below the configured level");
        });

        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("Stage started"));
        assert!(written.contains("02_chunking"));
        assert!(!written.contains("below the configured level"));
        assert!(!written.contains('\u{1b}'));
    }

    #[test]
    fn test_run_log_appends() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        for message in ["first run", "second run"] {
            let (file, _) = open_run_log(&config).unwrap();
            tracing::subscriber::with_default(subscriber(&config, file), || {
                tracing::warn!("{message}");
            });
        }

        let (_, path) = open_run_log(&config).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("first run"));
        assert!(written.contains("second run"));
    }
}
