pub mod complex;
pub mod error;
pub mod escape;
pub mod fractal;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use error::CoreError;
pub use escape::{estimate, Escape};
pub use fractal::{julia_escape_radius, FractalKind, FractalParams, MANDELBROT_ESCAPE_RADIUS};
pub use viewport::{PixelCoord, RasterSize, Viewport};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
