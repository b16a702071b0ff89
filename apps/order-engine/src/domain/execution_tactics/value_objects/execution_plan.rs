//! Execution Plan

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use super::StrategyKind;
use crate::domain::order_execution::OrderRequest;

/// How the steps of a plan relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionMode {
    /// One order.
    Single,
    /// Independent orders submitted one after another.
    Sequential,
    /// Orders separated by a fixed wait.
    Paced,
    /// Orders submitted back to back with no wait.
    Batch,
}

impl ExecutionMode {
    /// Log label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Sequential => "SEQUENTIAL",
            Self::Paced => "PACED",
            Self::Batch => "BATCH",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One order in a plan, with the wait that precedes its submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// Order to submit.
    pub request: OrderRequest,
    /// Wait before submitting this step.
    #[serde(rename = "delay_before_ms", serialize_with = "serialize_millis")]
    pub delay_before: Duration,
}

impl PlanStep {
    /// Step submitted without waiting.
    #[must_use]
    pub const fn immediate(request: OrderRequest) -> Self {
        Self {
            request,
            delay_before: Duration::ZERO,
        }
    }

    /// Step submitted after `delay_before`.
    #[must_use]
    pub const fn delayed(request: OrderRequest, delay_before: Duration) -> Self {
        Self {
            request,
            delay_before,
        }
    }
}

fn serialize_millis<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX))
}

/// Ordered orders compiled from one strategy.
///
/// Always holds at least one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionPlan {
    kind: StrategyKind,
    mode: ExecutionMode,
    steps: Vec<PlanStep>,
}

impl ExecutionPlan {
    /// Build a plan. Returns `None` for an empty step list.
    #[must_use]
    pub fn new(kind: StrategyKind, mode: ExecutionMode, steps: Vec<PlanStep>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self { kind, mode, steps })
    }

    /// Single-order plan.
    #[must_use]
    pub fn single(kind: StrategyKind, request: OrderRequest) -> Self {
        Self {
            kind,
            mode: ExecutionMode::Single,
            steps: vec![PlanStep::immediate(request)],
        }
    }

    /// Strategy that produced the plan.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Execution mode.
    #[must_use]
    pub const fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Steps in submission order.
    #[must_use]
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps. A constructed plan always has at least one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Order requests in submission order.
    pub fn requests(&self) -> impl Iterator<Item = &OrderRequest> {
        self.steps.iter().map(|step| &step.request)
    }

    /// Sum of all waits in the plan.
    #[must_use]
    pub fn total_delay(&self) -> Duration {
        self.steps.iter().map(|step| step.delay_before).sum()
    }

    /// Number of steps preceded by a non-zero wait.
    #[must_use]
    pub fn delayed_step_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| !step.delay_before.is_zero())
            .count()
    }
}

impl IntoIterator for ExecutionPlan {
    type Item = PlanStep;
    type IntoIter = std::vec::IntoIter<PlanStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
