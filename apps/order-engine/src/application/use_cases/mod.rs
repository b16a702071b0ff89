//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod execute_plan;
mod execute_strategy;

pub use execute_plan::{ExecutionRunner, OrderOutcome, OrderResult, RunResult};
pub use execute_strategy::ExecuteStrategyUseCase;
