//! Observer that prints confirmations and failures for a terminal user.

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use crate::application::ports::{ExchangeError, ExecutionObserver, OrderConfirmation};
use crate::application::use_cases::RunResult;
use crate::domain::order_execution::OrderRequest;

type Sink = Mutex<Box<dyn Write + Send>>;

/// Prints each exchange response as pretty JSON on stdout. Failures and
/// pacing notices go to stderr.
pub struct ConsoleObserver {
    out: Sink,
    err: Sink,
}

impl ConsoleObserver {
    /// Observer bound to the process's stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::with_writers(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Observer writing to arbitrary sinks.
    #[must_use]
    pub fn with_writers(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    fn write(sink: &Sink, text: &str) {
        if let Ok(mut writer) = sink.lock() {
            // A closed terminal must not abort the run.
            let _ = writeln!(writer, "{text}");
            let _ = writer.flush();
        }
    }
}

impl std::fmt::Debug for ConsoleObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleObserver").finish_non_exhaustive()
    }
}

impl ExecutionObserver for ConsoleObserver {
    fn on_placed(&self, step: usize, total: usize, _: &OrderRequest, conf: &OrderConfirmation) {
        let body = if conf.raw.is_null() {
            serde_json::to_string_pretty(conf)
        } else {
            serde_json::to_string_pretty(&conf.raw)
        }
        .unwrap_or_else(|e| format!("<unprintable response: {e}>"));

        if total > 1 {
            Self::write(&self.out, &format!("[{step}/{total}] {body}"));
        } else {
            Self::write(&self.out, &body);
        }
    }

    fn on_failed(&self, step: usize, total: usize, request: &OrderRequest, err: &ExchangeError) {
        Self::write(
            &self.err,
            &format!(
                "[{step}/{total}] {} {} {} failed: {err}",
                request.order_type(),
                request.side(),
                request.symbol()
            ),
        );
    }

    fn on_waiting(&self, step: usize, total: usize, delay: Duration) {
        Self::write(
            &self.err,
            &format!("Waiting {:.3}s before step {step}/{total}", delay.as_secs_f64()),
        );
    }

    fn on_run_finished(&self, result: &RunResult) {
        if !result.is_complete_success() {
            Self::write(
                &self.err,
                &format!(
                    "{} of {} orders failed",
                    result.failed_count(),
                    result.results().len()
                ),
            );
        }
    }
}
