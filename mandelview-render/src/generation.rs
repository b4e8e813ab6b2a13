use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Tracks which render is current, for stale-result detection and progress.
///
/// The caller holds one of these across renders. Advancing the generation
/// (on resize or budget change) marks every in-flight render stale: workers
/// stop picking up rows, and the caller compares the token recorded at
/// start against the current one to decide whether to keep or drop the
/// finished grid. The engine itself never aborts mid-pixel.
#[derive(Debug)]
pub struct RenderGeneration {
    generation: AtomicU64,
    rows_done: AtomicUsize,
    rows_total: AtomicUsize,
}

impl RenderGeneration {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            rows_done: AtomicUsize::new(0),
            rows_total: AtomicUsize::new(0),
        }
    }

    /// Mark all in-flight renders stale by advancing the generation.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Read the current generation token.
    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Reset progress for a new frame of `total` rows.
    pub fn reset_progress(&self, total: usize) {
        self.rows_total.store(total, Ordering::Relaxed);
        self.rows_done.store(0, Ordering::Relaxed);
    }

    /// Record one completed row.
    pub fn row_done(&self) {
        self.rows_done.fetch_add(1, Ordering::Relaxed);
    }

    /// Current progress as `(done, total)` rows.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.rows_done.load(Ordering::Relaxed),
            self.rows_total.load(Ordering::Relaxed),
        )
    }
}

impl Default for RenderGeneration {
    fn default() -> Self {
        Self::new()
    }
}
