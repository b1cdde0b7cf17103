pub mod buffer;
pub mod color;
pub mod error;
pub mod field;
pub mod renderer;
pub mod view;

// Re-export primary types for convenience.
pub use buffer::RasterBuffer;
pub use color::{ColorRgb, ColorSettings, IterationColorMap};
pub use error::RenderError;
pub use field::{compute_field, EscapeField};
pub use renderer::{colorize, render};
pub use view::ViewState;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
