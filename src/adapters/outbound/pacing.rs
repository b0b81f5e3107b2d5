use crate::domains::pacing::{DynStepPacer, StepPacer};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Real inter-step delay backed by the tokio timer.
pub struct TokioStepPacer {
    delay: Duration,
}

impl TokioStepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl StepPacer for TokioStepPacer {
    async fn pause(&self) {
        sleep(self.delay).await;
    }
}

struct NoOp;

#[async_trait]
impl StepPacer for NoOp {
    async fn pause(&self) {}
}

/// No-op pacer useful as default in unit tests
pub fn init_noop_pacer() -> DynStepPacer {
    Arc::new(NoOp {})
}
