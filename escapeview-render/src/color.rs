use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The three caller-chosen colors a frame is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Color for points that never escaped.
    pub in_set: ColorRgb,

    /// Gradient endpoint assigned to the lowest escape count in the frame.
    pub escape_lo: ColorRgb,

    /// Gradient endpoint assigned to the highest escape count in the frame.
    pub escape_hi: ColorRgb,
}

impl Default for ColorSettings {
    /// Black interior with a deep-blue to near-white gradient.
    fn default() -> Self {
        Self {
            in_set: ColorRgb::BLACK,
            escape_lo: ColorRgb::new(0, 7, 100),
            escape_hi: ColorRgb::new(237, 255, 255),
        }
    }
}

/// Maps escape counts to colors for one rendered frame.
///
/// Built from the distinct counts observed in a field: the lowest count gets
/// the low endpoint, the highest the high endpoint, and everything between
/// falls on the straight line between them. Storage is a dense table indexed
/// by `count - lo`, so counts inside the range that never occurred still
/// resolve to a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationColorMap {
    lo: u32,
    colors: Vec<ColorRgb>,
}

impl IterationColorMap {
    /// Build the map for the given set of distinct escape counts.
    ///
    /// An empty set yields an empty map: a frame with no escaped pixels never
    /// looks anything up. A single count maps straight to `escape_hi`.
    pub fn build(escape_lo: ColorRgb, escape_hi: ColorRgb, distinct: &BTreeSet<u32>) -> Self {
        let (lo, hi) = match (distinct.first(), distinct.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => {
                return Self {
                    lo: 0,
                    colors: Vec::new(),
                }
            }
        };
        if lo == hi {
            return Self {
                lo,
                colors: vec![escape_hi],
            };
        }
        Self {
            lo,
            colors: interpolate(escape_lo, escape_hi, (hi - lo + 1) as usize),
        }
    }

    /// The color for an escape count, or `None` when the count lies outside
    /// the range the map was built from.
    #[inline]
    pub fn color_for(&self, count: u32) -> Option<ColorRgb> {
        let idx = count.checked_sub(self.lo)? as usize;
        self.colors.get(idx).copied()
    }

    /// Number of entries in the dense table.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Evenly spaced colors from `from` to `to`, inclusive on both ends.
///
/// Callers guarantee `count >= 2`; both endpoints land exactly on the input
/// colors because the channel fraction hits 0 and 1 without accumulation.
fn interpolate(from: ColorRgb, to: ColorRgb, count: usize) -> Vec<ColorRgb> {
    assert!(count >= 2, "interpolation needs at least two entries, got {count}");
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| {
            let frac = i as f64 / last;
            ColorRgb::new(
                lerp_channel(from.r, to.r, frac),
                lerp_channel(from.g, to.g, frac),
                lerp_channel(from.b, to.b, frac),
            )
        })
        .collect()
}

#[inline]
fn lerp_channel(a: u8, b: u8, frac: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * frac)
        .round()
        .clamp(0.0, 255.0) as u8
}
