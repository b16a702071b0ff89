//! Execution Tactics Domain Services

mod strategy_engine;
mod validator;

pub use strategy_engine::StrategyEngine;
pub use validator::validate_request;
