use std::collections::BTreeSet;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use escapeview_core::{CoreError, Escape, FractalParams, PixelCoord, RasterSize, Viewport};

/// Per-pixel escape results for a full frame.
///
/// Row-major storage: `data[row * width + col]`. This is the raw output of the
/// field sweep before coloring; keeping it separate from colored pixels lets
/// the caller recolor without re-iterating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeField {
    pub width: u32,
    pub height: u32,
    pub data: Vec<Escape>,
}

impl EscapeField {
    fn new(raster: RasterSize) -> Self {
        Self {
            width: raster.width(),
            height: raster.height(),
            data: vec![Escape::Bounded; raster.pixel_count()],
        }
    }

    /// The escape result at `(row, col)`.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Escape {
        self.data[(row * self.width + col) as usize]
    }
}

/// Compute the escape field for every pixel of the raster.
///
/// Returns the field together with the set of distinct escape counts that
/// occurred, which the coloring pass uses to span its gradient. Rows are
/// computed in parallel over disjoint slices of the output; each worker
/// collects its own count set and the per-row sets are merged at the end.
///
/// The viewport width is re-checked here because viewport fields are public
/// and a caller can change them between renders; a zero or non-finite width
/// fails the whole render rather than producing a degenerate mapping.
pub fn compute_field(
    viewport: &Viewport,
    raster: RasterSize,
    params: &FractalParams,
) -> crate::Result<(EscapeField, BTreeSet<u32>)> {
    if viewport.width <= 0.0 || !viewport.width.is_finite() {
        return Err(CoreError::InvalidViewportWidth(viewport.width).into());
    }

    let start = Instant::now();
    debug!(
        width = raster.width(),
        height = raster.height(),
        max_iterations = params.max_iterations,
        kind = ?params.kind,
        "Starting field computation"
    );

    let mut field = EscapeField::new(raster);
    let row_len = raster.width() as usize;

    let distinct = field
        .data
        .par_chunks_mut(row_len)
        .enumerate()
        .map(|(row, slots)| {
            let mut seen = BTreeSet::new();
            for (col, slot) in slots.iter_mut().enumerate() {
                let pixel = PixelCoord::new(row as u32, col as u32);
                let escape = params.escape_time(viewport.pixel_to_point(pixel, raster));
                if let Some(n) = escape.count() {
                    seen.insert(n);
                }
                *slot = escape;
            }
            seen
        })
        .reduce(BTreeSet::new, |mut merged, mut other| {
            merged.append(&mut other);
            merged
        });

    info!(
        elapsed_ms = start.elapsed().as_millis(),
        distinct_counts = distinct.len(),
        "Field computation complete"
    );

    Ok((field, distinct))
}
