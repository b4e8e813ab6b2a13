pub mod error;
pub mod frame;
pub mod generation;
pub mod grid;
pub mod palette;
pub mod renderer;

pub use error::RenderError;
pub use frame::FrameBuffer;
pub use generation::RenderGeneration;
pub use grid::IterationGrid;
pub use palette::{ColorConfig, Hsb, Palette, SetBoundary};
pub use renderer::{render, FrameResult};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
