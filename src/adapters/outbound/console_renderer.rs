use crate::domains::render::{DynRenderSink, RenderSink};
use std::sync::Arc;

struct ConsoleBridge;

impl RenderSink for ConsoleBridge {
    fn draw_frame(&self, frame: &str) {
        // Clear the terminal and home the cursor before redrawing.
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", frame);
    }
}

/// Initialize the clear-and-redraw console frame sink.
pub fn init_console_renderer() -> DynRenderSink {
    Arc::new(ConsoleBridge {})
}
