use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::complex::Complex;
use crate::error::CoreError;

/// A pixel position in raster coordinates. Row 0 is the top row and rows
/// increase downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCoord {
    pub row: u32,
    pub col: u32,
}

impl PixelCoord {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Raster dimensions in pixels.
///
/// Both dimensions are checked once at construction, so every mapping that
/// takes a `RasterSize` can divide by them without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    width: u32,
    height: u32,
}

impl RasterSize {
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidRaster { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The pixel at the middle of the raster (integer division).
    #[inline]
    pub fn center(&self) -> PixelCoord {
        PixelCoord::new(self.height / 2, self.width / 2)
    }
}

/// The visible region of the complex plane.
///
/// `top_left` is the plane point under pixel (0, 0) and `width` is the span in
/// plane units across the full raster width. The height is always derived from
/// the raster's aspect ratio, so the mapping never stretches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Plane point under the top-left corner of the raster.
    pub top_left: Complex,

    /// Extent of the visible region along the real axis, in plane units.
    pub width: f64,
}

impl Viewport {
    /// Create a viewport with explicit parameters.
    pub fn new(top_left: Complex, width: f64) -> crate::Result<Self> {
        if width <= 0.0 || !width.is_finite() {
            return Err(CoreError::InvalidViewportWidth(width));
        }
        Ok(Self { top_left, width })
    }

    /// Extent of the visible region along the imaginary axis for the given
    /// raster.
    #[inline]
    pub fn height(&self, raster: RasterSize) -> f64 {
        self.width * raster.height() as f64 / raster.width() as f64
    }

    /// Map a pixel to its point on the complex plane.
    ///
    /// A pixel a fraction `k` of the way across the raster maps `k` of the
    /// way along the real span. Rows grow downward while the imaginary axis
    /// grows upward, so the row fraction is subtracted: row 0 has the maximum
    /// imaginary part.
    #[inline]
    pub fn pixel_to_point(&self, pixel: PixelCoord, raster: RasterSize) -> Complex {
        Complex::new(
            self.top_left.re + (pixel.col as f64 / raster.width() as f64) * self.width,
            self.top_left.im - (pixel.row as f64 / raster.height() as f64) * self.height(raster),
        )
    }

    /// A viewport of width `new_width` centered on the plane point currently
    /// under `center_pixel`.
    ///
    /// This is the single operation behind both zoom and click-to-center
    /// panning: the zoom helpers pass the raster's center pixel with a scaled
    /// width, panning passes the clicked pixel with the width unchanged.
    pub fn recentered(
        &self,
        center_pixel: PixelCoord,
        new_width: f64,
        raster: RasterSize,
    ) -> crate::Result<Viewport> {
        let center = self.pixel_to_point(center_pixel, raster);
        let new_height = new_width * raster.height() as f64 / raster.width() as f64;
        let viewport = Viewport::new(
            Complex::new(center.re - new_width / 2.0, center.im + new_height / 2.0),
            new_width,
        )?;
        debug!(
            row = center_pixel.row,
            col = center_pixel.col,
            center = %center,
            new_width,
            "Recentered viewport"
        );
        Ok(viewport)
    }

    /// Zoom in by `factor`, keeping the plane point under the raster's center
    /// pixel in the middle of the view.
    pub fn zoomed_in(&self, factor: f64, raster: RasterSize) -> crate::Result<Viewport> {
        self.recentered(raster.center(), self.width / factor, raster)
    }

    /// Zoom out by `factor`, recentering like [`zoomed_in`](Self::zoomed_in).
    pub fn zoomed_out(&self, factor: f64, raster: RasterSize) -> crate::Result<Viewport> {
        self.recentered(raster.center(), self.width * factor, raster)
    }

    /// Recenter on `pixel` without changing the zoom level.
    pub fn panned_to(&self, pixel: PixelCoord, raster: RasterSize) -> crate::Result<Viewport> {
        self.recentered(pixel, self.width, raster)
    }
}

impl Default for Viewport {
    /// The whole-set view: both axes span `[-1.5, 1.5]` on a square raster.
    fn default() -> Self {
        Self {
            top_left: Complex::new(-1.5, 1.5),
            width: 3.0,
        }
    }
}
