use std::collections::BTreeSet;

use escapeview_core::{Complex, Escape, FractalParams, PixelCoord, RasterSize, Viewport};
use escapeview_render::{
    compute_field, render, ColorRgb, ColorSettings, IterationColorMap, ViewState,
};

/// The default view on a 4×4 raster at 10 iterations, with the gradient
/// running black to white and a sentinel in-set color.
///
/// Escape counts per pixel (B = bounded), verified by hand:
/// ```text
/// 0 1 1 1
/// 2 3 B 1
/// B B B 2
/// 2 3 B 1
/// ```
/// Counts {0, 1, 2, 3} span four gradient entries, so the channel values
/// step 0, 85, 170, 255.
fn golden_colors() -> ColorSettings {
    ColorSettings {
        in_set: ColorRgb::new(1, 2, 3),
        escape_lo: ColorRgb::BLACK,
        escape_hi: ColorRgb::WHITE,
    }
}

#[test]
fn golden_four_by_four_rgba() {
    let raster = RasterSize::new(4, 4).unwrap();
    let params = FractalParams::mandelbrot(10).unwrap();
    let buffer = render(&Viewport::default(), raster, &params, &golden_colors()).unwrap();

    #[rustfmt::skip]
    let expected: [[u8; 4]; 16] = [
        [0, 0, 0, 255],       [85, 85, 85, 255],    [85, 85, 85, 255],    [85, 85, 85, 255],
        [170, 170, 170, 255], [255, 255, 255, 255], [1, 2, 3, 255],       [85, 85, 85, 255],
        [1, 2, 3, 255],       [1, 2, 3, 255],       [1, 2, 3, 255],       [170, 170, 170, 255],
        [170, 170, 170, 255], [255, 255, 255, 255], [1, 2, 3, 255],       [85, 85, 85, 255],
    ];
    for (i, want) in expected.iter().enumerate() {
        let row = i as u32 / 4;
        let col = i as u32 % 4;
        assert_eq!(
            buffer.pixel(row, col),
            want,
            "pixel ({row}, {col}) has the wrong color"
        );
    }
}

#[test]
fn golden_field_feeds_the_map_exactly() {
    let raster = RasterSize::new(4, 4).unwrap();
    let params = FractalParams::mandelbrot(10).unwrap();
    let (field, distinct) = compute_field(&Viewport::default(), raster, &params).unwrap();

    assert_eq!(field.get(0, 0), Escape::Escaped(0));
    assert_eq!(field.get(2, 2), Escape::Bounded);
    assert_eq!(distinct, BTreeSet::from([0, 1, 2, 3]));

    let map = IterationColorMap::build(ColorRgb::BLACK, ColorRgb::WHITE, &distinct);
    assert_eq!(map.len(), 4);
    assert_eq!(map.color_for(0), Some(ColorRgb::BLACK));
    assert_eq!(map.color_for(3), Some(ColorRgb::WHITE));
}

#[test]
fn end_to_end_mandelbrot_render() {
    let raster = RasterSize::new(64, 64).unwrap();
    let buffer = render(
        &Viewport::default(),
        raster,
        &FractalParams::default(),
        &ColorSettings::default(),
    )
    .unwrap();

    assert_eq!(buffer.pixels.len(), 64 * 64 * 4);
    assert!(buffer.pixels.chunks_exact(4).all(|px| px[3] == 255));

    let has_non_black = buffer
        .pixels
        .chunks_exact(4)
        .any(|px| px[0] > 0 || px[1] > 0 || px[2] > 0);
    assert!(
        has_non_black,
        "rendered image should contain non-black pixels"
    );
}

#[test]
fn end_to_end_julia_render() {
    let raster = RasterSize::new(64, 64).unwrap();
    let params = FractalParams::julia(300, Complex::new(-1.0, 0.0)).unwrap();
    let buffer = render(
        &Viewport::default(),
        raster,
        &params,
        &ColorSettings::default(),
    )
    .unwrap();

    assert_eq!(buffer.pixels.len(), 64 * 64 * 4);
    // The basilica Julia set has bounded points on the real axis and escaped
    // points elsewhere, so both color paths are exercised.
    let in_set = ColorSettings::default().in_set;
    let has_in_set = buffer
        .pixels
        .chunks_exact(4)
        .any(|px| px[..3] == [in_set.r, in_set.g, in_set.b]);
    let has_escaped = buffer
        .pixels
        .chunks_exact(4)
        .any(|px| px[..3] != [in_set.r, in_set.g, in_set.b]);
    assert!(has_in_set && has_escaped);
}

#[test]
fn render_determinism() {
    let raster = RasterSize::new(48, 36).unwrap();
    let params = FractalParams::default();
    let colors = ColorSettings::default();

    let a = render(&Viewport::default(), raster, &params, &colors).unwrap();
    let b = render(&Viewport::default(), raster, &params, &colors).unwrap();
    assert_eq!(a.pixels, b.pixels, "renders must be deterministic");
}

#[test]
fn all_bounded_frame_is_uniform_in_set() {
    // A region strictly inside the main cardioid: nothing escapes, the
    // distinct set is empty, and the whole frame falls back to in_set.
    let viewport = Viewport::new(Complex::new(-0.2, 0.1), 0.2).unwrap();
    let raster = RasterSize::new(8, 8).unwrap();
    let params = FractalParams::default();
    let colors = golden_colors();

    let (_, distinct) = compute_field(&viewport, raster, &params).unwrap();
    assert!(distinct.is_empty());

    let buffer = render(&viewport, raster, &params, &colors).unwrap();
    for chunk in buffer.pixels.chunks_exact(4) {
        assert_eq!(chunk, &[1, 2, 3, 255]);
    }
}

#[test]
fn zoom_and_pan_interaction_round_trip() {
    let mut state = ViewState::new(RasterSize::new(64, 64).unwrap());
    let original = state.viewport;

    state.zoom_in().unwrap();
    state.zoom_out().unwrap();
    assert!((state.viewport.width - original.width).abs() < 1e-10);
    assert!((state.viewport.top_left.re - original.top_left.re).abs() < 1e-10);
    assert!((state.viewport.top_left.im - original.top_left.im).abs() < 1e-10);

    // Panning to a corner then rendering still produces a full frame.
    state.recenter_on(PixelCoord::new(0, 0)).unwrap();
    assert_eq!(state.viewport.width, original.width);
    let buffer = state.render().unwrap();
    assert_eq!(buffer.pixels.len(), 64 * 64 * 4);
}
