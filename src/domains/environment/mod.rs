pub mod aggregate;
pub mod events;
pub mod grid;
pub mod projections;
pub mod types;

pub use aggregate::*;
pub use events::*;
pub use grid::*;
pub use projections::*;
pub use types::*;
