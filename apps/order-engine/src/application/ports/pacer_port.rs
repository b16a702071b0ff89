//! Pacer Port (Driven Port)

use std::time::Duration;

use async_trait::async_trait;

/// Waits between paced plan steps.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Suspend for `delay`.
    async fn wait(&self, delay: Duration);
}
