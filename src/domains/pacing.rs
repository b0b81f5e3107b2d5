use async_trait::async_trait;
use std::sync::Arc;

/// Port for the pause between simulation steps. The pause is cosmetic
/// pacing for a human watching the board, not a scheduling primitive;
/// adapters decide whether it means a real delay or nothing at all.
#[async_trait]
pub trait StepPacer: Send + Sync + 'static {
    async fn pause(&self);
}

pub type DynStepPacer = Arc<dyn StepPacer>;
