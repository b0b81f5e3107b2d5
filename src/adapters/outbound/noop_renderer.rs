use crate::domains::render::{DynRenderSink, RenderSink};
use std::sync::Arc;

struct NoOp;

impl RenderSink for NoOp {
    fn draw_frame(&self, _frame: &str) {}
}

/// No-op frame sink useful as default in unit tests
pub fn init_noop_renderer() -> DynRenderSink {
    Arc::new(NoOp {})
}
