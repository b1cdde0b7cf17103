use thiserror::Error;

/// Errors originating from the core escape-time engine.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid max iterations: {0} (must be >= 1)")]
    InvalidMaxIterations(u32),

    #[error("invalid viewport width: {0} (must be positive and finite)")]
    InvalidViewportWidth(f64),

    #[error("invalid raster dimensions: {width}×{height} (must be > 0)")]
    InvalidRaster { width: u32, height: u32 },
}
