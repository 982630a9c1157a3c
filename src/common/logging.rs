//! Logging and tracing configuration
//!
//! Interactive output (prompts, received messages, diagnostics) is written
//! directly to stdout/stderr; tracing only carries lifecycle events.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::LoggingConfig;
use super::paths;

/// Name of the log file inside the log directory
const LOG_FILE: &str = "wsclient.log";

/// Initialize tracing for the CLI
///
/// The stderr layer is controlled by `RUST_LOG` and defaults to WARN so it
/// does not interleave with the prompt. When file logging is enabled, a second
/// layer writes to `<data dir>/logs/wsclient.log` using the configured filter.
///
/// The returned guard must be held for the lifetime of the program so that
/// buffered file output is flushed on exit.
pub fn init_cli(config: &LoggingConfig) -> Option<WorkerGuard> {
    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wsclient=warn,warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_filter(stderr_filter);

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new(&config.level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Open the non-blocking log file writer, if file logging is enabled
fn file_writer(
    config: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !config.file {
        return None;
    }

    let log_dir = paths::log_dir()?;
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Could not create log directory: {}", e);
        return None;
    }

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    Some(tracing_appender::non_blocking(appender))
}
