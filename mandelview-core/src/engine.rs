use crate::budget::IterationBudget;
use crate::complex::Complex;

/// Squared bailout radius. The orbit has escaped once `|z|² > 4.0` — radius
/// 2 is exact under the squared comparison, so the hot loop never takes a
/// square root.
pub const BAILOUT_NORM_SQ: f64 = 4.0;

/// Count the iterations of `z ← z² + c` (from `z₀ = 0`) that stay within
/// the bailout radius.
///
/// Returns a count in `[0, budget]`. A count equal to the budget means the
/// orbit did not escape within the allotted iterations; the point is
/// *presumed* interior — the standard escape-time approximation, not a
/// proof of membership.
///
/// Pure function of its arguments. Iteration state is local to each call,
/// so points may be computed concurrently in any order.
#[inline]
pub fn escape_time(c: Complex, budget: IterationBudget) -> u32 {
    let max = budget.get();
    let mut z = Complex::ZERO;
    let mut n = 0u32;
    while n < max && z.norm_sq() < BAILOUT_NORM_SQ {
        // z = z² + c, expanded to avoid recomputing the products.
        z = Complex::new(z.re * z.re - z.im * z.im + c.re, 2.0 * z.re * z.im + c.im);
        n += 1;
    }
    n
}
