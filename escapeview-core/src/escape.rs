use crate::complex::Complex;

/// The outcome of iterating a single point.
///
/// The estimator stores only the raw escape step; turning counts into colors
/// is the render crate's concern, keeping the hot loop lean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// The orbit left the escape region. The payload is the 0-based index of
    /// the update step at which escape was detected.
    Escaped(u32),

    /// The orbit stayed inside the escape region for the whole iteration
    /// budget. The point is treated as (likely) inside the set.
    Bounded,
}

impl Escape {
    /// The escape step index, or `None` for bounded points.
    #[inline]
    pub fn count(self) -> Option<u32> {
        match self {
            Self::Escaped(n) => Some(n),
            Self::Bounded => None,
        }
    }

    #[inline]
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded)
    }
}

/// Iterate `update` from `start` until the orbit escapes or the budget runs
/// out.
///
/// The counter begins at 0 and the escape test `norm(z) > threshold` (strict)
/// runs after each update, so the start value itself is never tested and an
/// orbit already outside the region reports `Escaped(0)`. With
/// `max_iterations = 0` no update is applied and the result is `Bounded`.
///
/// `threshold` must be positive and finite; both production call sites in
/// [`FractalParams`](crate::FractalParams) guarantee this.
pub fn estimate<F>(start: Complex, update: F, threshold: f64, max_iterations: u32) -> Escape
where
    F: Fn(Complex) -> Complex,
{
    debug_assert!(
        threshold > 0.0 && threshold.is_finite(),
        "escape threshold must be positive and finite, got {threshold}"
    );

    // |z| > t  ⇔  |z|² > t²  for t > 0, which saves a sqrt per step.
    let threshold_sq = threshold * threshold;

    let mut z = start;
    for n in 0..max_iterations {
        z = update(z);
        if z.norm_sq() > threshold_sq {
            return Escape::Escaped(n);
        }
    }
    Escape::Bounded
}
