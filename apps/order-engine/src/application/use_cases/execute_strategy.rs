//! Execute Strategy Use Case

use std::sync::Arc;

use tracing::info;

use super::{ExecutionRunner, RunResult};
use crate::application::ports::{ExchangeClient, ExecutionObserver, Pacer};
use crate::domain::execution_tactics::{ExecutionPlan, StrategyEngine, StrategyRequest};
use crate::domain::shared::ValidationError;

/// Validates, compiles and runs one strategy request.
pub struct ExecuteStrategyUseCase<E, P, O>
where
    E: ExchangeClient,
    P: Pacer,
    O: ExecutionObserver,
{
    engine: StrategyEngine,
    runner: ExecutionRunner<E, P, O>,
}

impl<E, P, O> ExecuteStrategyUseCase<E, P, O>
where
    E: ExchangeClient,
    P: Pacer,
    O: ExecutionObserver,
{
    /// Create a new ExecuteStrategyUseCase.
    pub const fn new(exchange: Arc<E>, pacer: Arc<P>, observer: Arc<O>) -> Self {
        Self {
            engine: StrategyEngine::new(),
            runner: ExecutionRunner::new(exchange, pacer, observer),
        }
    }

    /// Compile without executing.
    pub fn plan(&self, request: &StrategyRequest) -> Result<ExecutionPlan, ValidationError> {
        self.engine.compile(request)
    }

    /// Execute the use case.
    ///
    /// Validation errors return before any exchange call. Exchange failures
    /// are reported per step inside the [`RunResult`].
    pub async fn execute(&self, request: &StrategyRequest) -> Result<RunResult, ValidationError> {
        let plan = self.plan(request)?;

        info!(
            strategy = %plan.kind(),
            mode = %plan.mode(),
            steps = plan.len(),
            total_delay_secs = plan.total_delay().as_secs_f64(),
            "Executing strategy"
        );

        Ok(self.runner.run(plan).await)
    }
}
