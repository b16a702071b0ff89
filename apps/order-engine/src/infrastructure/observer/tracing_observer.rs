//! Observer that records execution events as structured tracing events.

use std::time::Duration;

use tracing::{error, info, warn};

use crate::application::ports::{ExchangeError, ExecutionObserver, OrderConfirmation};
use crate::application::use_cases::RunResult;
use crate::domain::execution_tactics::ExecutionPlan;
use crate::domain::order_execution::OrderRequest;

/// Emits one tracing event per execution event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExecutionObserver for TracingObserver {
    fn on_placed(
        &self,
        step: usize,
        total: usize,
        request: &OrderRequest,
        confirmation: &OrderConfirmation,
    ) {
        info!(
            step,
            total,
            symbol = %request.symbol(),
            side = %request.side(),
            order_type = %request.order_type(),
            quantity = %request.quantity(),
            price = ?request.price(),
            stop_price = ?request.stop_price(),
            order_id = confirmation.order_id,
            client_order_id = %confirmation.client_order_id,
            status = %confirmation.status,
            "Order placed"
        );
    }

    fn on_failed(&self, step: usize, total: usize, request: &OrderRequest, err: &ExchangeError) {
        error!(
            step,
            total,
            symbol = %request.symbol(),
            side = %request.side(),
            order_type = %request.order_type(),
            quantity = %request.quantity(),
            price = ?request.price(),
            code = err.code(),
            exchange_code = ?err.exchange_code(),
            error = %err,
            "Order failed"
        );
    }

    fn on_run_started(&self, plan: &ExecutionPlan) {
        info!(
            strategy = %plan.kind(),
            mode = %plan.mode(),
            steps = plan.len(),
            "Run started"
        );
    }

    fn on_waiting(&self, step: usize, total: usize, delay: Duration) {
        info!(
            step,
            total,
            delay_secs = delay.as_secs_f64(),
            "Waiting before next slice"
        );
    }

    fn on_run_finished(&self, result: &RunResult) {
        if result.is_complete_success() {
            info!(
                strategy = %result.kind(),
                placed = result.placed_count(),
                "Run finished"
            );
        } else {
            warn!(
                strategy = %result.kind(),
                placed = result.placed_count(),
                failed = result.failed_count(),
                "Run finished with failures"
            );
        }
    }
}
