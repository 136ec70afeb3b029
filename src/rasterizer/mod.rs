//! Fixed-point triangle rasterization.
//!
//! The pipeline runs in four stages, one value type each:
//!
//! 1. [`quantise`]: snap each [`Vec2`] vertex to a [`ScreenPos`] on the
//!    `1 / SCALE` subpixel grid. No float is compared after this.
//! 2. [`edge_functions`]: one [`EdgeFunction`] per edge, in cyclic order.
//! 3. [`EdgeFunction::biased`]: apply the top-left fill rule so that shared
//!    edges are drawn by exactly one of their triangles.
//! 4. [`Pixels`]: walk the [`BoundingBox`] row by row and yield every pixel
//!    at which all edge functions are non-negative.
//!
//! Two triangles sharing an edge tile exactly: no pixel is left out and none
//! is produced twice.
//!
//! # Winding precondition
//!
//! Vertices must run counter-clockwise as seen on a y-down pixel grid, which
//! is `(v1 - v0) x (v2 - v0) < 0`. A triangle in the other order produces no
//! pixels at all, silently; nothing inside the scan checks for it. Use
//! [`Winding::of`] beforehand when the order is not known.
//!
//! # Range
//!
//! Coordinates are quantised to `i32` and edge functions evaluated in `i64`.
//! Within `±MAX_COORDINATE` pixels (2_097_152 at 8 subpixel bits) no
//! intermediate can overflow. Larger coordinates are clamped during
//! quantisation.

mod bounds;
mod edgefunction;
mod fixed;
mod scan;
mod winding;

pub use bounds::BoundingBox;
pub use edgefunction::{edge_functions, EdgeFunction};
pub use fixed::{quantise, ScreenPos, MAX_COORDINATE, MAX_SUBPIXEL, SCALE, SUBPIXEL_BITS};
pub use scan::Pixels;
pub use winding::{signed_area_x2, Winding};

use crate::math::vec2::Vec2;

/// Pixels covered by the triangle `v0, v1, v2`, in row-major order.
///
/// See the [module docs](self) for the winding precondition. The result is a
/// pure function of the input: calling again yields the identical sequence.
///
/// # Example
/// ```
/// use trifill::math::vec2::Vec2;
/// use trifill::rasterizer::rasterise;
///
/// let pixels: Vec<_> = rasterise(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(0.0, 4.0),
///     Vec2::new(4.0, 0.0),
/// )
/// .collect();
/// assert!(pixels.contains(&(1, 1)));
/// ```
pub fn rasterise(v0: Vec2, v1: Vec2, v2: Vec2) -> Pixels<3> {
    rasterise_convex([v0, v1, v2])
}

/// Pixels covered by a convex polygon with `N` vertices in rasterizer
/// winding. The same edge tests and fill rule as [`rasterise`], so a convex
/// polygon covers exactly the union of any fan of triangles cut from it.
pub fn rasterise_convex<const N: usize>(vertices: [Vec2; N]) -> Pixels<N> {
    let snapped = vertices.map(quantise);
    let edges = edge_functions(snapped).map(EdgeFunction::biased);
    Pixels::new(edges, BoundingBox::from_points(&snapped))
}
