pub mod buffered_renderer;
pub mod console_renderer;
pub mod noop_renderer;
pub mod pacing;

pub use buffered_renderer::*;
pub use console_renderer::*;
pub use noop_renderer::*;
pub use pacing::*;
