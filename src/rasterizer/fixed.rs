//! Fixed-point subpixel coordinates.
//!
//! Vertices are snapped once to a grid of `1 / SCALE` pixel. Past that point
//! the rasterizer only ever compares integers.

use crate::math::vec2::Vec2;

/// Fractional bits of a subpixel coordinate.
pub const SUBPIXEL_BITS: u32 = 8;

/// Subpixels per pixel along each axis.
pub const SCALE: i32 = 1 << SUBPIXEL_BITS;

/// Largest quantised magnitude, in subpixels, for which edge evaluation in
/// `i64` cannot overflow.
///
/// With `|x|, |y| <= 2^29` the edge coefficients satisfy `|a|, |b| <= 2^30`
/// and `|c| <= 2^60`, so `a*X + b*Y + c` stays below `2^61`.
pub const MAX_SUBPIXEL: i32 = 1 << 29;

/// Largest pixel coordinate magnitude that quantises without clamping:
/// `2^29 / SCALE`, i.e. 2_097_152 at 8 subpixel bits.
pub const MAX_COORDINATE: f32 = (MAX_SUBPIXEL / SCALE) as f32;

/// A vertex snapped to the subpixel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenPos {
    pub x: i32,
    pub y: i32,
}

impl ScreenPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The pixel this subpixel position falls in, rounding toward negative
    /// infinity on both axes.
    pub const fn pixel(self) -> (i32, i32) {
        (self.x >> SUBPIXEL_BITS, self.y >> SUBPIXEL_BITS)
    }
}

impl From<Vec2> for ScreenPos {
    fn from(v: Vec2) -> Self {
        quantise(v)
    }
}

/// Snap a vertex to the subpixel grid.
///
/// Each coordinate is multiplied by [`SCALE`] and truncated **toward zero**,
/// so `-0.5px` becomes `-128` and `-0.001px` becomes `0`. Truncation, not
/// rounding, decides which pixels sit exactly on an edge, and it is the same
/// for every vertex of every triangle.
///
/// Coordinates outside `±MAX_COORDINATE` are clamped to it and NaN maps to
/// zero; neither is an error.
pub fn quantise(v: Vec2) -> ScreenPos {
    ScreenPos::new(snap(v.x), snap(v.y))
}

#[inline]
fn snap(c: f32) -> i32 {
    let limit = MAX_SUBPIXEL as f32;
    // `as` truncates toward zero and turns NaN into 0
    (c * SCALE as f32).clamp(-limit, limit) as i32
}
