//! Execution Tactics Value Objects

mod execution_plan;
mod price_ladder;
mod strategy_intent;
mod strategy_request;
mod twap_schedule;

pub use execution_plan::{ExecutionMode, ExecutionPlan, PlanStep};
pub use price_ladder::LadderRange;
pub use strategy_intent::{OrderTarget, StrategyIntent};
pub use strategy_request::{StrategyKind, StrategyRequest};
pub use twap_schedule::TwapSchedule;
