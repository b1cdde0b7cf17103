use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use escapeview_core::{FractalParams, RasterSize, Viewport};

use crate::buffer::RasterBuffer;
use crate::color::{ColorSettings, IterationColorMap};
use crate::field::{compute_field, EscapeField};

/// Turn an escape field into an RGBA raster.
///
/// Bounded pixels take the in-set color; escaped pixels look their count up
/// in `map`. The map must have been built from the same field's distinct
/// counts, so a missing entry is a construction bug, not input error.
pub fn colorize(
    field: &EscapeField,
    map: &IterationColorMap,
    colors: &ColorSettings,
) -> RasterBuffer {
    let mut buffer = RasterBuffer::new(field.width, field.height);
    buffer
        .pixels
        .par_chunks_mut(4)
        .zip(field.data.par_iter())
        .for_each(|(pixel, &escape)| {
            let color = match escape.count() {
                Some(n) => map
                    .color_for(n)
                    .expect("every escape count in the field has a map entry"),
                None => colors.in_set,
            };
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
            pixel[3] = 255;
        });
    buffer
}

/// Render a full frame: compute the escape field, build the frame's color
/// map from the observed counts, and assemble the RGBA raster.
///
/// Any failure is terminal to the frame; a partially colored image is never
/// returned.
pub fn render(
    viewport: &Viewport,
    raster: RasterSize,
    params: &FractalParams,
    colors: &ColorSettings,
) -> crate::Result<RasterBuffer> {
    let start = Instant::now();

    let (field, distinct) = compute_field(viewport, raster, params)?;
    let map = IterationColorMap::build(colors.escape_lo, colors.escape_hi, &distinct);
    debug!(entries = map.len(), "Built iteration color map");

    let buffer = colorize(&field, &map, colors);

    info!(
        elapsed_ms = start.elapsed().as_millis(),
        width = raster.width(),
        height = raster.height(),
        "Render complete"
    );
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use escapeview_core::Complex;
    use crate::color::ColorRgb;

    #[test]
    fn render_produces_full_rgba_frame() {
        let raster = RasterSize::new(32, 24).unwrap();
        let params = FractalParams::default();
        let buffer = render(&Viewport::default(), raster, &params, &ColorSettings::default())
            .unwrap();

        assert_eq!(buffer.width, 32);
        assert_eq!(buffer.height, 24);
        assert_eq!(buffer.pixels.len(), 32 * 24 * 4);
        assert!(buffer.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn bounded_pixels_take_in_set_color() {
        // The origin sits under pixel (2, 2) of the default 4×4 view and
        // never escapes.
        let raster = RasterSize::new(4, 4).unwrap();
        let params = FractalParams::mandelbrot(10).unwrap();
        let colors = ColorSettings {
            in_set: ColorRgb::new(9, 99, 199),
            ..ColorSettings::default()
        };
        let buffer = render(&Viewport::default(), raster, &params, &colors).unwrap();
        assert_eq!(buffer.pixel(2, 2), &[9, 99, 199, 255]);
    }

    #[test]
    fn uniform_escape_frame_takes_high_endpoint() {
        // Every pixel escapes at step 0, so the map has one entry and the
        // whole frame is the high endpoint color.
        let viewport = Viewport::new(Complex::new(20.0, 20.0), 0.5).unwrap();
        let raster = RasterSize::new(6, 6).unwrap();
        let params = FractalParams::mandelbrot(30).unwrap();
        let colors = ColorSettings::default();
        let buffer = render(&viewport, raster, &params, &colors).unwrap();

        let hi = colors.escape_hi;
        for chunk in buffer.pixels.chunks_exact(4) {
            assert_eq!(chunk, &[hi.r, hi.g, hi.b, 255]);
        }
    }

    #[test]
    fn colorize_keeps_field_dimensions() {
        let raster = RasterSize::new(16, 8).unwrap();
        let params = FractalParams::mandelbrot(20).unwrap();
        let (field, distinct) = compute_field(&Viewport::default(), raster, &params).unwrap();
        let colors = ColorSettings::default();
        let map = IterationColorMap::build(colors.escape_lo, colors.escape_hi, &distinct);

        let buffer = colorize(&field, &map, &colors);
        assert_eq!(buffer.width, 16);
        assert_eq!(buffer.height, 8);
        assert_eq!(buffer.pixels.len(), 16 * 8 * 4);
    }

    #[test]
    fn invalid_viewport_fails_the_frame() {
        let mut viewport = Viewport::default();
        viewport.width = -1.0;
        let raster = RasterSize::new(8, 8).unwrap();
        let result = render(&viewport, raster, &FractalParams::default(), &ColorSettings::default());
        assert!(result.is_err());
    }
}
