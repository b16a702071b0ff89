//! Execution Tactics Bounded Context
//!
//! Turns a trading intent (market, limit, stop-limit, bracket, TWAP, grid)
//! into an ordered execution plan of exchange order requests.
//!
//! Validation and compilation are pure: nothing here performs I/O.

pub mod services;
pub mod value_objects;

pub use services::{StrategyEngine, validate_request};
pub use value_objects::{
    ExecutionMode, ExecutionPlan, LadderRange, OrderTarget, PlanStep, StrategyIntent,
    StrategyKind, StrategyRequest, TwapSchedule,
};
