use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;
use crate::map::map_range;

/// Canvas sizes the windowing layer accepts. Resize requests outside these
/// bounds are rejected by the caller and the previous viewport stays in
/// effect; the core itself only refuses zero-area canvases.
pub const MIN_CANVAS_WIDTH: u32 = 352;
pub const MAX_CANVAS_WIDTH: u32 = 3860;
pub const MIN_CANVAS_HEIGHT: u32 = 240;
pub const MAX_CANVAS_HEIGHT: u32 = 2160;

/// Default canvas size on startup.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1280;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 720;

/// Whether a requested canvas size lies within the supported bounds.
///
/// Decision helper for the resize handler — the core never clamps.
pub fn canvas_in_bounds(width: u32, height: u32) -> bool {
    (MIN_CANVAS_WIDTH..=MAX_CANVAS_WIDTH).contains(&width)
        && (MIN_CANVAS_HEIGHT..=MAX_CANVAS_HEIGHT).contains(&height)
}

/// Defines the visible region of the complex plane.
///
/// The square of side `min(width, height)` pixels is centred within the
/// longer canvas dimension and mapped onto `[-2, 2] × [-2, 2]`; `zoom`
/// shrinks that window and `offset` translates it. One snapshot per render —
/// the core holds no state between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Magnification; 1.0 shows the full `[-2, 2]` square.
    pub zoom: f64,

    /// Translation applied after zoom, in complex-plane units.
    pub offset: Complex,
}

impl Viewport {
    /// Create a viewport with explicit parameters.
    pub fn new(width: u32, height: u32, zoom: f64, offset: Complex) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidViewport {
                reason: format!("dimensions must be > 0, got {width}×{height}"),
            });
        }
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("zoom must be positive and finite, got {zoom}"),
            });
        }
        Ok(Self {
            width,
            height,
            zoom,
            offset,
        })
    }

    /// Unzoomed, untranslated view of the given canvas.
    pub fn with_canvas(width: u32, height: u32) -> crate::Result<Self> {
        Self::new(width, height, 1.0, Complex::ZERO)
    }

    /// Pixel origin of the centred square region.
    ///
    /// Odd width/height differences centre on a half-pixel boundary, so
    /// non-square canvases stay symmetric.
    fn square_origin(&self) -> (f64, f64) {
        let min_dim = self.width.min(self.height);
        let max_dim = self.width.max(self.height);
        let centering = (max_dim - min_dim) as f64 / 2.0;
        if self.width == max_dim {
            (centering, 0.0)
        } else {
            (0.0, centering)
        }
    }

    /// Map a pixel coordinate to a point on the complex plane.
    ///
    /// `(0, 0)` is the top-left pixel. Image row 0 corresponds to the most
    /// positive imaginary value, so the y-axis mapping is inverted.
    #[inline]
    pub fn pixel_to_complex(&self, px: u32, py: u32) -> Complex {
        let min_dim = self.width.min(self.height) as f64;
        let (start_x, start_y) = self.square_origin();
        let re = map_range(px as f64, start_x, start_x + min_dim, -2.0, 2.0);
        let im = map_range(py as f64, start_y, start_y + min_dim, 2.0, -2.0);
        Complex::new(re / self.zoom + self.offset.re, im / self.zoom + self.offset.im)
    }

    /// The aspect ratio of the canvas (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Number of pixels in a full frame.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            zoom: 1.0,
            offset: Complex::ZERO,
        }
    }
}
