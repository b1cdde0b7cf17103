use escapeview_core::{FractalParams, PixelCoord, RasterSize, Viewport};

use crate::buffer::RasterBuffer;
use crate::color::ColorSettings;
use crate::error::RenderError;
use crate::renderer::render;

/// Interactive view state: everything a host UI mutates between frames.
///
/// One owner instead of scattered globals. Interactions replace the viewport
/// through `&mut self` while `render` borrows the state immutably, so a frame
/// always reads one consistent snapshot.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub viewport: Viewport,
    pub raster: RasterSize,
    pub params: FractalParams,
    pub colors: ColorSettings,
    zoom_factor: f64,
}

impl ViewState {
    /// Factor applied per zoom step: each step halves or doubles the view.
    pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;

    /// The default whole-set view on the given raster.
    pub fn new(raster: RasterSize) -> Self {
        Self {
            viewport: Viewport::default(),
            raster,
            params: FractalParams::default(),
            colors: ColorSettings::default(),
            zoom_factor: Self::DEFAULT_ZOOM_FACTOR,
        }
    }

    /// Replace the per-step zoom factor. A factor of 1 or below would make
    /// the zoom buttons no-ops or invert them, so it is rejected.
    pub fn with_zoom_factor(mut self, factor: f64) -> crate::Result<Self> {
        if factor <= 1.0 || !factor.is_finite() {
            return Err(RenderError::InvalidZoomFactor(factor));
        }
        self.zoom_factor = factor;
        Ok(self)
    }

    #[inline]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Zoom in one step, keeping the view centered.
    pub fn zoom_in(&mut self) -> crate::Result<()> {
        self.viewport = self.viewport.zoomed_in(self.zoom_factor, self.raster)?;
        Ok(())
    }

    /// Zoom out one step, keeping the view centered.
    pub fn zoom_out(&mut self) -> crate::Result<()> {
        self.viewport = self.viewport.zoomed_out(self.zoom_factor, self.raster)?;
        Ok(())
    }

    /// Center the view on the plane point under `pixel` without changing the
    /// zoom level.
    pub fn recenter_on(&mut self, pixel: PixelCoord) -> crate::Result<()> {
        self.viewport = self.viewport.panned_to(pixel, self.raster)?;
        Ok(())
    }

    /// Render the current state into an RGBA raster.
    pub fn render(&self) -> crate::Result<RasterBuffer> {
        render(&self.viewport, self.raster, &self.params, &self.colors)
    }
}
