//! Execute Plan Use Case

use std::sync::Arc;

use tracing::debug;

use crate::application::ports::{
    ExchangeClient, ExchangeError, ExecutionObserver, OrderConfirmation, Pacer,
};
use crate::domain::execution_tactics::{ExecutionPlan, StrategyKind};
use crate::domain::order_execution::OrderRequest;

/// What happened to one step.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Accepted by the exchange.
    Placed(OrderConfirmation),
    /// Rejected or not delivered.
    Failed(ExchangeError),
}

/// Outcome of one plan step.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    /// 1-based position in the plan.
    pub step: usize,
    /// Submitted request.
    pub request: OrderRequest,
    /// Exchange outcome.
    pub outcome: OrderOutcome,
}

impl OrderResult {
    /// True when the exchange accepted the order.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        matches!(self.outcome, OrderOutcome::Placed(_))
    }
}

/// One result per plan step, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    kind: StrategyKind,
    results: Vec<OrderResult>,
}

impl RunResult {
    /// Strategy that was run.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Per-step results.
    #[must_use]
    pub fn results(&self) -> &[OrderResult] {
        &self.results
    }

    /// Steps accepted by the exchange.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_placed()).count()
    }

    /// Steps that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.len() - self.placed_count()
    }

    /// True when every step was placed.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Drives an execution plan against the exchange.
///
/// Steps are submitted strictly in order, one at a time. A failed step is
/// recorded and the run continues with the next one.
pub struct ExecutionRunner<E, P, O>
where
    E: ExchangeClient,
    P: Pacer,
    O: ExecutionObserver,
{
    exchange: Arc<E>,
    pacer: Arc<P>,
    observer: Arc<O>,
}

impl<E, P, O> ExecutionRunner<E, P, O>
where
    E: ExchangeClient,
    P: Pacer,
    O: ExecutionObserver,
{
    /// Create a new runner.
    pub const fn new(exchange: Arc<E>, pacer: Arc<P>, observer: Arc<O>) -> Self {
        Self {
            exchange,
            pacer,
            observer,
        }
    }

    /// Attempt every step of `plan` and collect the outcomes.
    pub async fn run(&self, plan: ExecutionPlan) -> RunResult {
        let kind = plan.kind();
        let total = plan.len();
        self.observer.on_run_started(&plan);

        let mut results = Vec::with_capacity(total);
        for (index, step) in plan.into_iter().enumerate() {
            let number = index + 1;

            if index > 0 && !step.delay_before.is_zero() {
                self.observer.on_waiting(number, total, step.delay_before);
                self.pacer.wait(step.delay_before).await;
            }

            let outcome = match self.exchange.submit(&step.request).await {
                Ok(confirmation) => {
                    debug!(step = number, order_id = confirmation.order_id, "Step placed");
                    self.observer
                        .on_placed(number, total, &step.request, &confirmation);
                    OrderOutcome::Placed(confirmation)
                }
                Err(error) => {
                    debug!(step = number, total, code = error.code(), "Step failed");
                    self.observer.on_failed(number, total, &step.request, &error);
                    OrderOutcome::Failed(error)
                }
            };

            results.push(OrderResult {
                step: number,
                request: step.request,
                outcome,
            });
        }

        let result = RunResult { kind, results };
        self.observer.on_run_finished(&result);
        result
    }
}
