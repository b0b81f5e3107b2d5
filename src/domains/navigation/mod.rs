pub mod aggregate;
pub mod events;
pub mod history;
pub mod projections;

pub use aggregate::*;
pub use events::*;
pub use history::*;
pub use projections::*;
