//! Tracing setup.
//!
//! Human-readable events go to stderr so that stdout stays reserved for
//! exchange responses and plan JSON. The same events are appended to a log
//! file (default `bot.log`) through a non-blocking writer.
//!
//! The filter honors `RUST_LOG`; without it `order_engine=info` is used.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "order_engine=info";

/// Keeps the file writer alive. Dropping it flushes pending log lines.
#[derive(Debug)]
pub struct TelemetryGuard {
    file_guard: Option<WorkerGuard>,
}

impl TelemetryGuard {
    /// Whether events are also being written to the log file.
    #[must_use]
    pub const fn writes_file(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Install the global subscriber.
///
/// An unwritable log file downgrades to console-only logging with a warning
/// on stderr rather than aborting.
#[must_use]
pub fn init_telemetry(log_file: &Path) -> TelemetryGuard {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter());

    let (file_layer, guard) = match open_file_appender(log_file) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("warning: logging to {} disabled: {e}", log_file.display());
            (None, None)
        }
    };

    // A subscriber may already be installed (tests, embedding).
    let _ = tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init();

    TelemetryGuard { file_guard: guard }
}

fn open_file_appender(log_file: &Path) -> Result<RollingFileAppender, String> {
    let file_name = log_file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| "log path has no file name".to_string())?;
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    // Preflight so an unwritable target is reported here instead of being
    // dropped silently by the background writer.
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(file_name))
        .map_err(|e| e.to_string())?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| e.to_string())
}
