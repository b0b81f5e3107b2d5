use std::sync::Arc;

/// Presentation port (Hexagonal port) for drawing simulation frames.
/// Kept intentionally small and non-fallible from the domain perspective.
pub trait RenderSink: Send + Sync + 'static {
    fn draw_frame(&self, frame: &str);
}

pub type DynRenderSink = Arc<dyn RenderSink>;
