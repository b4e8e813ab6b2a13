pub mod budget;
pub mod complex;
pub mod engine;
pub mod error;
pub mod map;
pub mod viewport;

// Re-export primary types for convenience.
pub use budget::IterationBudget;
pub use complex::Complex;
pub use engine::{escape_time, BAILOUT_NORM_SQ};
pub use error::CoreError;
pub use map::map_range;
pub use viewport::{canvas_in_bounds, Viewport};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
