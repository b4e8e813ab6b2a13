use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use mandelview_core::{escape_time, IterationBudget, Viewport};

use crate::generation::RenderGeneration;
use crate::grid::IterationGrid;

/// The result of a full-frame computation.
///
/// Contains raw iteration counts, no colors — the caller applies a
/// [`Palette`](crate::Palette) to get drawable pixels, which also lets a
/// palette change skip the recompute entirely.
pub struct FrameResult {
    pub grid: IterationGrid,
    /// Generation token read when the render started. Compare against the
    /// current token to decide whether this result is stale.
    pub generation: u64,
    pub elapsed: Duration,
    /// True when the generation advanced mid-render; the grid is partial
    /// and should be discarded, never merged with a newer frame.
    pub cancelled: bool,
    pub rows_computed: usize,
}

/// Compute iteration counts for every pixel of the viewport.
///
/// Rows are distributed across the Rayon pool; each row's pixels are written
/// into its own disjoint slice of the grid, so no locking is needed. Row
/// boundaries double as cancellation checkpoints: once `generation` is
/// invalidated, remaining rows are skipped and the result is flagged
/// `cancelled`.
pub fn render(
    viewport: &Viewport,
    budget: IterationBudget,
    generation: &Arc<RenderGeneration>,
) -> FrameResult {
    let start = Instant::now();
    let token = generation.current();

    debug!(
        width = viewport.width,
        height = viewport.height,
        budget = budget.get(),
        "starting frame"
    );
    generation.reset_progress(viewport.height as usize);

    let mut grid = IterationGrid::new(viewport.width, viewport.height, budget);
    let width = viewport.width as usize;

    grid.data
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(py, row)| {
            if generation.current() != token {
                return;
            }
            for (px, count) in row.iter_mut().enumerate() {
                let c = viewport.pixel_to_complex(px as u32, py as u32);
                *count = escape_time(c, budget);
            }
            generation.row_done();
        });

    let cancelled = generation.current() != token;
    let (rows_computed, _) = generation.progress();
    let elapsed = start.elapsed();
    info!(
        elapsed_ms = elapsed.as_millis(),
        rows_computed, cancelled, "frame complete"
    );

    FrameResult {
        grid,
        generation: token,
        elapsed,
        cancelled,
        rows_computed,
    }
}
