//! Infrastructure Layer
//!
//! This module contains all adapters (implementations) for the ports defined
//! in the application layer. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**:
//!   - `broker/`: Exchange API adapters (Binance USDT-M futures)
//!   - `observer/`: Execution event sinks (tracing, console)
//!   - `pacer`: Tokio timer for paced plans
//!
//! - **Configuration**: `config/` loads credentials and request settings.

pub mod broker;
pub mod config;
pub mod observer;
pub mod pacer;

pub use pacer::TokioPacer;
