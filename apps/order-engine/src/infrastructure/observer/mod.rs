//! Execution Observers
//!
//! Implementations of `ExecutionObserver`: structured logging, terminal
//! output, and a fan-out set combining several observers.

mod console_observer;
mod tracing_observer;

use std::sync::Arc;
use std::time::Duration;

pub use console_observer::ConsoleObserver;
pub use tracing_observer::TracingObserver;

use crate::application::ports::{ExchangeError, ExecutionObserver, OrderConfirmation};
use crate::application::use_cases::RunResult;
use crate::domain::execution_tactics::ExecutionPlan;
use crate::domain::order_execution::OrderRequest;

/// Forwards every event to each member, in insertion order.
#[derive(Default, Clone)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn ExecutionObserver>>,
}

impl ObserverSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer.
    #[must_use]
    pub fn with(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True when no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ExecutionObserver for ObserverSet {
    fn on_placed(
        &self,
        step: usize,
        total: usize,
        request: &OrderRequest,
        confirmation: &OrderConfirmation,
    ) {
        for observer in &self.observers {
            observer.on_placed(step, total, request, confirmation);
        }
    }

    fn on_failed(&self, step: usize, total: usize, request: &OrderRequest, error: &ExchangeError) {
        for observer in &self.observers {
            observer.on_failed(step, total, request, error);
        }
    }

    fn on_run_started(&self, plan: &ExecutionPlan) {
        for observer in &self.observers {
            observer.on_run_started(plan);
        }
    }

    fn on_waiting(&self, step: usize, total: usize, delay: Duration) {
        for observer in &self.observers {
            observer.on_waiting(step, total, delay);
        }
    }

    fn on_run_finished(&self, result: &RunResult) {
        for observer in &self.observers {
            observer.on_run_finished(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NoOpObserver;
    use crate::domain::order_execution::OrderSide;
    use crate::domain::shared::Symbol;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl ExecutionObserver for Counter {
        fn on_placed(&self, _: usize, _: usize, _: &OrderRequest, _: &OrderConfirmation) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }

        fn on_failed(&self, _: usize, _: usize, _: &OrderRequest, _: &ExchangeError) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn set_fans_out_to_every_member() {
        let a = Arc::new(Counter::default());
        let b = Arc::new(Counter::default());
        let set = ObserverSet::new()
            .with(a.clone())
            .with(b.clone())
            .with(Arc::new(NoOpObserver));
        assert_eq!(set.len(), 3);

        let request =
            OrderRequest::market(Symbol::parse("BTCUSDT").unwrap(), OrderSide::Buy, dec!(1))
                .unwrap();
        let error = ExchangeError::Connection {
            message: "reset".to_string(),
        };
        set.on_failed(1, 2, &request, &error);
        set.on_failed(2, 2, &request, &error);

        assert_eq!(a.0.load(Ordering::SeqCst), 2);
        assert_eq!(b.0.load(Ordering::SeqCst), 2);
    }
}
