/// Map `val` linearly from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Both the pixel-to-plane mapping and the palette gradient are built on
/// this. An empty input range (`in_max == in_min`) would divide by zero; it
/// is reachable from degenerate one-pixel canvases and one-entry gradient
/// segments, so the utility returns `out_min` for it instead of letting NaN
/// leak into the iteration loop.
#[inline]
pub fn map_range(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (out_max - out_min) * (val - in_min) / span
}
