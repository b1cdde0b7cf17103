use crate::complex::Complex;
use crate::error::CoreError;
use crate::escape::{estimate, Escape};

/// Escape radius for the Mandelbrot iteration. Once `|z| > 2` the orbit
/// cannot return, so 2 is the classical bailout bound.
pub const MANDELBROT_ESCAPE_RADIUS: f64 = 2.0;

/// Escape radius for the Julia set defined by `c`:
/// `R = (1 + √(1 + 4·|c|)) / 2`, the positive root of `R² − R = |c|`.
#[inline]
pub fn julia_escape_radius(c: Complex) -> f64 {
    (1.0 + (1.0 + 4.0 * c.norm()).sqrt()) / 2.0
}

/// Which member of the quadratic family `z ↦ z² + c` is being iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FractalKind {
    /// `z₀ = 0` and `c` is the plane point under test.
    Mandelbrot,
    /// `z₀` is the plane point under test and `c` is a fixed constant.
    Julia,
}

/// Parameters controlling fractal iteration.
///
/// The cached `julia_radius` field is recomputed whenever the Julia constant
/// changes, and on deserialization, so persisted settings always stay
/// consistent. Each mode uses its own escape threshold: the fixed
/// [`MANDELBROT_ESCAPE_RADIUS`] for Mandelbrot, the derived radius for Julia.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FractalParams {
    /// Maximum number of iterations before declaring a point bounded.
    pub max_iterations: u32,

    /// Which fractal these parameters describe.
    pub kind: FractalKind,

    /// The fixed constant defining the Julia set. Unused in Mandelbrot mode.
    julia_c: Complex,

    /// Cached `julia_escape_radius(julia_c)`, precomputed so the per-pixel
    /// dispatch does not re-derive it.
    #[serde(skip)]
    julia_radius: f64,
}

/// Recomputes the cached radius on load instead of trusting the input.
impl<'de> serde::Deserialize<'de> for FractalParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            max_iterations: u32,
            kind: FractalKind,
            julia_c: Complex,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(Self {
            max_iterations: raw.max_iterations,
            kind: raw.kind,
            julia_c: raw.julia_c,
            julia_radius: julia_escape_radius(raw.julia_c),
        })
    }
}

impl FractalParams {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 300;
    pub const DEFAULT_JULIA_C: Complex = Complex { re: -1.0, im: 0.0 };

    /// Mandelbrot parameters with the given iteration budget.
    pub fn mandelbrot(max_iterations: u32) -> crate::Result<Self> {
        Self::with_kind(max_iterations, FractalKind::Mandelbrot, Self::DEFAULT_JULIA_C)
    }

    /// Parameters for the Julia set defined by `c`.
    pub fn julia(max_iterations: u32, c: Complex) -> crate::Result<Self> {
        Self::with_kind(max_iterations, FractalKind::Julia, c)
    }

    fn with_kind(max_iterations: u32, kind: FractalKind, julia_c: Complex) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self {
            max_iterations,
            kind,
            julia_c,
            julia_radius: julia_escape_radius(julia_c),
        })
    }

    /// The fixed constant defining the Julia set.
    #[inline]
    pub fn julia_c(&self) -> Complex {
        self.julia_c
    }

    /// Pre-computed escape radius for the current Julia constant.
    #[inline]
    pub fn julia_radius(&self) -> f64 {
        self.julia_radius
    }

    /// Update the Julia constant and recompute the cached escape radius.
    pub fn set_julia_c(&mut self, c: Complex) {
        self.julia_c = c;
        self.julia_radius = julia_escape_radius(c);
    }

    /// Return a copy with a different `max_iterations` value.
    pub fn with_max_iterations(self, max_iterations: u32) -> crate::Result<Self> {
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self {
            max_iterations,
            ..self
        })
    }

    /// Classify a single plane point with the configured fractal.
    ///
    /// Mandelbrot iterates `z ↦ z² + point` from the origin; Julia iterates
    /// `z ↦ z² + c` starting from `point`.
    #[inline]
    pub fn escape_time(&self, point: Complex) -> Escape {
        match self.kind {
            FractalKind::Mandelbrot => estimate(
                Complex::ZERO,
                |z| z.square_add(point),
                MANDELBROT_ESCAPE_RADIUS,
                self.max_iterations,
            ),
            FractalKind::Julia => estimate(
                point,
                |z| z.square_add(self.julia_c),
                self.julia_radius,
                self.max_iterations,
            ),
        }
    }
}

impl Default for FractalParams {
    /// Mandelbrot at 300 iterations, with `c = -1 + 0i` as the stored Julia
    /// constant for when the caller flips the kind.
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            kind: FractalKind::Mandelbrot,
            julia_c: Self::DEFAULT_JULIA_C,
            julia_radius: julia_escape_radius(Self::DEFAULT_JULIA_C),
        }
    }
}
