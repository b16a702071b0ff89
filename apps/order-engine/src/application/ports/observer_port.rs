//! Execution Observer Port (Driven Port)
//!
//! Receives per-step execution events. Observers report; they never
//! influence the run.

use std::time::Duration;

use super::{ExchangeError, OrderConfirmation};
use crate::application::use_cases::RunResult;
use crate::domain::execution_tactics::ExecutionPlan;
use crate::domain::order_execution::OrderRequest;

/// Sink for execution events.
///
/// Step numbers are 1-based and `total` is the plan length.
pub trait ExecutionObserver: Send + Sync {
    /// A step was accepted by the exchange.
    fn on_placed(
        &self,
        step: usize,
        total: usize,
        request: &OrderRequest,
        confirmation: &OrderConfirmation,
    );

    /// A step failed.
    fn on_failed(&self, step: usize, total: usize, request: &OrderRequest, error: &ExchangeError);

    /// A run is about to start.
    fn on_run_started(&self, _plan: &ExecutionPlan) {}

    /// The runner is pacing before `step`.
    fn on_waiting(&self, _step: usize, _total: usize, _delay: Duration) {}

    /// Every step has been attempted.
    fn on_run_finished(&self, _result: &RunResult) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl ExecutionObserver for NoOpObserver {
    fn on_placed(&self, _: usize, _: usize, _: &OrderRequest, _: &OrderConfirmation) {}

    fn on_failed(&self, _: usize, _: usize, _: &OrderRequest, _: &ExchangeError) {}
}
