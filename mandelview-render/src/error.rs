use thiserror::Error;

/// Errors originating from the frame pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A palette generated for one budget was asked to color a grid computed
    /// under another. Stale palettes are never silently indexed.
    #[error("palette has {palette_len} colors but grid was computed under budget {budget}")]
    PaletteBudgetMismatch { palette_len: u32, budget: u32 },

    #[error("empty grid: {width}×{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error(transparent)]
    Core(#[from] mandelview_core::CoreError),
}
