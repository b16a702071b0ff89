// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Order Engine - Strategy Execution Core
//!
//! Turns a trading intent into one or more exchange orders on Binance USDT-M
//! Futures and reports the outcome of each.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure logic, no I/O
//!   - `order_execution`: Order requests and their per-type field rules
//!   - `execution_tactics`: Strategy validation and compilation into plans
//!     (market, limit, stop-limit, bracket, TWAP, grid)
//!
//! - **Application**: Orchestration
//!   - `ports`: `ExchangeClient`, `ExecutionObserver`, `Pacer`
//!   - `use_cases`: `ExecutionRunner`, `ExecuteStrategyUseCase`
//!
//! - **Infrastructure**: Adapters
//!   - `broker`: Signed Binance REST client with retry
//!   - `observer`: Tracing and console observers
//!   - `config`: Environment-based settings
//!
//! # Flow
//!
//! ```text
//! StrategyRequest ─► validate ─► StrategyIntent ─► plan ─► ExecutionPlan
//!                                                           │
//!                     ExchangeClient ◄─ ExecutionRunner ◄───┘
//!                                            │
//!                                            └─► RunResult (one entry per step)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Validation and plan compilation with no I/O.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Exchange, observer and configuration adapters.
pub mod infrastructure;

// =============================================================================
// Process Support
// =============================================================================

/// Fatal errors and exit codes.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::execution_tactics::{
    ExecutionMode, ExecutionPlan, LadderRange, PlanStep, StrategyEngine, StrategyIntent,
    StrategyKind, StrategyRequest, TwapSchedule, validate_request,
};
pub use domain::order_execution::{OrderRequest, OrderSide, OrderType, TimeInForce};
pub use domain::shared::{Symbol, ValidationError};

// Application re-exports
pub use application::ports::{
    ExchangeClient, ExchangeError, ExecutionObserver, NoOpObserver, OrderConfirmation, Pacer,
};
pub use application::use_cases::{
    ExecuteStrategyUseCase, ExecutionRunner, OrderOutcome, OrderResult, RunResult,
};

// Infrastructure re-exports
pub use infrastructure::TokioPacer;
pub use infrastructure::broker::{
    BinanceConfig, BinanceEnvironment, BinanceError, BinanceFuturesAdapter,
};
pub use infrastructure::config::{ConfigError, EngineConfig};
pub use infrastructure::observer::{ConsoleObserver, ObserverSet, TracingObserver};

pub use error::EngineError;
