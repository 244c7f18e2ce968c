use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

const DEFAULT_DIRECTIVE: &str = "job_cleaner=info";

/// Initializes console logging, plus a daily-rotated JSON log file when a directory is configured.
///
/// The returned guard flushes the file writer on drop; hold it for the life of the process.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // Console output goes to stderr so stdout stays clean for command results
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            if let Err(e) = fs::create_dir_all(directory) {
                eprintln!(
                    "Failed to create log directory '{}': {}",
                    directory.display(),
                    e
                );
                (None, None)
            } else {
                let file_appender =
                    tracing_appender::rolling::daily(directory, &config.file_prefix);
                let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
                let layer = fmt::layer().json().with_writer(non_blocking_writer);
                (Some(layer), Some(guard))
            }
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
