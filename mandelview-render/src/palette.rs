use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use mandelview_core::{map_range, IterationBudget};

use crate::error::RenderError;
use crate::frame::FrameBuffer;
use crate::grid::IterationGrid;

// ---------------------------------------------------------------------------
// HSB color
// ---------------------------------------------------------------------------

/// A color in hue/saturation/brightness space.
///
/// The gradient is specified in HSB (hue in degrees, saturation and
/// brightness in `[0, 1]`) and converted to RGBA for storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert to an opaque RGBA color via hue-sector decomposition.
    pub fn to_rgba(self) -> [u8; 4] {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let sector = h.floor() as i32;
        let f = h - sector as f64;
        let v = self.brightness.clamp(0.0, 1.0);
        let s = self.saturation.clamp(0.0, 1.0);
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);
        let (r, g, b) = match sector.rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        [channel(r), channel(g), channel(b), 255]
    }
}

fn channel(x: f64) -> u8 {
    (x * 255.0).round() as u8
}

// ---------------------------------------------------------------------------
// Color config
// ---------------------------------------------------------------------------

/// Which counts the coloring pass treats as in-set.
///
/// Both conventions are in use across renderers, so the boundary is a
/// configuration rather than a fixed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetBoundary {
    /// Only a count equal to the budget is in-set.
    #[default]
    Exclusive,
    /// The final palette slot (`budget − 1`) is folded into the background
    /// as well.
    Inclusive,
}

/// How iteration counts become colors: background for in-set pixels and the
/// boundary rule deciding which counts those are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// RGBA for presumed-interior pixels. Not part of the palette table.
    pub background: [u8; 4],
    pub boundary: SetBoundary,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 255],
            boundary: SetBoundary::default(),
        }
    }
}

impl ColorConfig {
    #[inline]
    fn is_in_set(&self, count: u32, budget: u32) -> bool {
        match self.boundary {
            SetBoundary::Exclusive => count >= budget,
            SetBoundary::Inclusive => count + 1 >= budget,
        }
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// An ordered table of exactly `budget` colors; index `i` is the color for
/// iteration count `i`.
///
/// Regenerated wholesale whenever the budget changes and immutable
/// afterwards, so concurrent coloring never observes a half-built gradient.
/// The in-set count (`== budget`) is deliberately absent — it renders as
/// the configured background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 4]>,
}

impl Palette {
    /// Build the three-segment gradient for the given budget:
    /// blue fading to white over the first quarter, white warming to yellow
    /// up to the half, then a hue sweep from yellow through green and cyan
    /// back to blue.
    ///
    /// Budgets below 4 collapse the leading segments (integer division);
    /// the degenerate one-entry interpolations resolve to the segment start
    /// per [`map_range`]'s fallback, and the table still has `budget`
    /// entries.
    pub fn generate(budget: IterationBudget) -> Self {
        let len = budget.get();
        let half = len / 2;
        let quarter = len / 4;

        let colors = (0..len)
            .map(|i| {
                let hsb = if i < quarter {
                    let s = map_range(i as f64, 0.0, quarter as f64 - 1.0, 1.0, 0.0);
                    Hsb::new(240.0, s, 1.0)
                } else if i < half {
                    let s = map_range(i as f64, quarter as f64, half as f64 - 1.0, 0.0, 1.0);
                    Hsb::new(60.0, s, 1.0)
                } else {
                    let hue = map_range(i as f64, half as f64, len as f64 - 1.0, 60.0, 240.0);
                    Hsb::new(hue, 1.0, 1.0)
                };
                hsb.to_rgba()
            })
            .collect();

        Self { colors }
    }

    /// Number of entries; always equal to the budget the palette was
    /// generated for.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for iteration count `i`; panics if `i` is out of table range.
    #[inline]
    pub fn color(&self, i: u32) -> [u8; 4] {
        self.colors[i as usize]
    }

    /// Map a grid of iteration counts to a drawable RGBA frame.
    ///
    /// Counts the boundary rule classifies as in-set become
    /// `config.background`; every other count indexes the table directly.
    /// Refuses a grid computed under a different budget than this palette
    /// was generated for.
    pub fn colorize(&self, grid: &IterationGrid, config: &ColorConfig) -> crate::Result<FrameBuffer> {
        if self.colors.len() != grid.budget as usize {
            return Err(RenderError::PaletteBudgetMismatch {
                palette_len: self.colors.len() as u32,
                budget: grid.budget,
            });
        }
        if grid.data.is_empty() {
            return Err(RenderError::EmptyGrid {
                width: grid.width,
                height: grid.height,
            });
        }

        let mut frame = FrameBuffer::new(grid.width, grid.height);
        frame
            .pixels
            .par_chunks_mut(4)
            .zip(grid.data.par_iter())
            .for_each(|(pixel, &count)| {
                let rgba = if config.is_in_set(count, grid.budget) {
                    config.background
                } else {
                    self.color(count)
                };
                pixel.copy_from_slice(&rgba);
            });
        Ok(frame)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
