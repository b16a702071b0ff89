//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems: the
//! exchange, the clock used for pacing, and the event sink.

mod exchange_port;
mod observer_port;
mod pacer_port;

#[cfg(test)]
pub use exchange_port::MockExchangeClient;
pub use exchange_port::{ExchangeClient, ExchangeError, OrderConfirmation};
pub use observer_port::{ExecutionObserver, NoOpObserver};
pub use pacer_port::Pacer;
