//! Tokio-backed pacer.

use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::Pacer;

/// Waits on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
