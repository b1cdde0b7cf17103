use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid zoom factor: {0} (must be > 1 and finite)")]
    InvalidZoomFactor(f64),

    #[error(transparent)]
    Core(#[from] escapeview_core::CoreError),
}
