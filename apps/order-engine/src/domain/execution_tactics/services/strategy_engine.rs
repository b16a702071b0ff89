//! Strategy Engine Domain Service

use tracing::debug;

use super::validate_request;
use crate::domain::execution_tactics::value_objects::{
    ExecutionMode, ExecutionPlan, LadderRange, OrderTarget, PlanStep, StrategyIntent,
    StrategyKind, StrategyRequest, TwapSchedule,
};
use crate::domain::order_execution::OrderRequest;
use crate::domain::shared::ValidationError;

/// Compiles trading intents into execution plans.
///
/// Stateless and free of I/O: the same intent always yields the same plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyEngine;

impl StrategyEngine {
    /// Create a new strategy engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate a raw request, then compile it.
    ///
    /// Invalid input fails closed: an error and no plan.
    pub fn compile(&self, request: &StrategyRequest) -> Result<ExecutionPlan, ValidationError> {
        let intent = validate_request(request)?;
        self.plan(&intent)
    }

    /// Compile a validated intent.
    pub fn plan(&self, intent: &StrategyIntent) -> Result<ExecutionPlan, ValidationError> {
        let kind = intent.kind();
        let plan = match intent {
            StrategyIntent::Market(target) => ExecutionPlan::single(
                kind,
                OrderRequest::market(target.symbol.clone(), target.side, target.quantity)?,
            ),
            StrategyIntent::Limit { target, price } => ExecutionPlan::single(
                kind,
                OrderRequest::limit(
                    target.symbol.clone(),
                    target.side,
                    target.quantity,
                    *price,
                )?,
            ),
            StrategyIntent::StopLimit {
                target,
                stop_price,
                limit_price,
            } => ExecutionPlan::single(
                kind,
                OrderRequest::stop_limit(
                    target.symbol.clone(),
                    target.side,
                    target.quantity,
                    *stop_price,
                    *limit_price,
                )?,
            ),
            StrategyIntent::Bracket {
                target,
                take_profit_price,
                stop_price,
            } => bracket_plan(target, *take_profit_price, *stop_price)?,
            StrategyIntent::TimeSliced { target, schedule } => twap_plan(target, schedule)?,
            StrategyIntent::PriceLadder { target, ladder } => ladder_plan(target, ladder)?,
        };

        debug!(
            strategy = %plan.kind(),
            mode = %plan.mode(),
            steps = plan.len(),
            "Compiled execution plan"
        );

        Ok(plan)
    }
}

/// Both exit legs close the position, so they trade the opposite side.
fn bracket_plan(
    target: &OrderTarget,
    take_profit_price: rust_decimal::Decimal,
    stop_price: rust_decimal::Decimal,
) -> Result<ExecutionPlan, ValidationError> {
    let exit_side = target.side.opposite();
    let steps = vec![
        PlanStep::immediate(OrderRequest::take_profit(
            target.symbol.clone(),
            exit_side,
            target.quantity,
            take_profit_price,
        )?),
        PlanStep::immediate(OrderRequest::stop_market(
            target.symbol.clone(),
            exit_side,
            target.quantity,
            stop_price,
        )?),
    ];
    non_empty(StrategyKind::Bracket, ExecutionMode::Sequential, steps)
}

fn twap_plan(
    target: &OrderTarget,
    schedule: &TwapSchedule,
) -> Result<ExecutionPlan, ValidationError> {
    let slice_quantity = schedule.slice_quantity(target.quantity);
    let steps = (0..schedule.slice_count())
        .map(|index| {
            OrderRequest::market(target.symbol.clone(), target.side, slice_quantity)
                .map(|request| PlanStep::delayed(request, schedule.delay_before(index)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    non_empty(StrategyKind::TimeSliced, ExecutionMode::Paced, steps)
}

fn ladder_plan(
    target: &OrderTarget,
    ladder: &LadderRange,
) -> Result<ExecutionPlan, ValidationError> {
    let steps = ladder
        .levels()
        .map(|price| {
            OrderRequest::limit(target.symbol.clone(), target.side, target.quantity, price)
                .map(PlanStep::immediate)
        })
        .collect::<Result<Vec<_>, _>>()?;
    non_empty(StrategyKind::PriceLadder, ExecutionMode::Batch, steps)
}

fn non_empty(
    kind: StrategyKind,
    mode: ExecutionMode,
    steps: Vec<PlanStep>,
) -> Result<ExecutionPlan, ValidationError> {
    ExecutionPlan::new(kind, mode, steps).ok_or_else(|| ValidationError::OutOfRange {
        field: "steps",
        value: "0".to_string(),
    })
}
