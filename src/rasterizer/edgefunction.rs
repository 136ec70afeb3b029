//! Integer edge functions and the top-left fill rule.
//!
//! # Edge Function
//!
//! For an edge from `P0 = (x0, y0)` to `P1 = (x1, y1)` the edge function is the
//! linear form
//!
//! ```text
//! E(P) = a * P.x + b * P.y + c
//!
//! a = y1 - y0
//! b = x0 - x1
//! c = y0 * (x1 - x0) - x0 * (y1 - y0)
//! ```
//!
//! which equals `(P - P0) x (P1 - P0)`: zero on the line through the edge,
//! and of opposite sign on either side. All three coefficients are exact
//! integers in subpixel units, so evaluating `E` needs no division, square
//! root or float. Scaling every coordinate by the same positive factor does
//! not change its sign, which is why working on the subpixel grid is safe.
//!
//! # Winding
//!
//! The three edges of a triangle are taken in cyclic order `(v0, v1)`,
//! `(v1, v2)`, `(v2, v0)`. Interior points evaluate non-negative on all three
//! when `(v1 - v0) x (v2 - v0) < 0` on a y-down pixel grid, i.e. the vertices
//! run counter-clockwise as seen on screen. The opposite winding makes every
//! interior point negative, see [`Winding`](super::Winding).
//!
//! # Fill Rule
//!
//! A pixel lying exactly on an edge shared by two triangles evaluates to zero
//! for both. The two triangles see that edge with opposite direction, so
//! their `(a, b)` pairs are negatives of each other and exactly one of them is
//! classified *top-left*: `a > 0`, or `a == 0 && b > 0`. That edge has its
//! `c` lowered by one, which turns the tie into `-1` and hands the pixel to
//! the neighbour. Every boundary pixel therefore belongs to exactly one
//! triangle, whatever order they are drawn in.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use super::fixed::{ScreenPos, SCALE};

/// One triangle edge as `a*x + b*y + c` over subpixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeFunction {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl EdgeFunction {
    /// Builds the unbiased edge function for the directed edge `p0 -> p1`.
    pub fn from_edge(p0: ScreenPos, p1: ScreenPos) -> Self {
        let (x0, y0) = (i64::from(p0.x), i64::from(p0.y));
        let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
        Self {
            a: y1 - y0,
            b: x0 - x1,
            c: y0 * (x1 - x0) - x0 * (y1 - y0),
        }
    }

    /// Whether this edge loses ties under the fill rule.
    #[inline]
    pub fn is_top_left(&self) -> bool {
        (self.a == 0 && self.b > 0) || self.a > 0
    }

    /// `-1` for top and left edges, `0` otherwise.
    #[inline]
    pub fn fill_rule_bias(&self) -> i64 {
        if self.is_top_left() {
            -1
        } else {
            0
        }
    }

    /// This edge with its fill-rule bias folded into `c`.
    ///
    /// Applying it twice biases twice; callers bias once, right after
    /// [`from_edge`](Self::from_edge).
    pub fn biased(self) -> Self {
        Self {
            c: self.c + self.fill_rule_bias(),
            ..self
        }
    }

    /// Evaluates at a subpixel position.
    #[inline]
    pub fn at_subpixel(&self, p: ScreenPos) -> i64 {
        self.a * i64::from(p.x) + self.b * i64::from(p.y) + self.c
    }

    /// Evaluates at the integer pixel `(x, y)`, i.e. at `(x*SCALE, y*SCALE)`.
    #[inline]
    pub fn at_pixel(&self, x: i32, y: i32) -> i64 {
        let scale = i64::from(SCALE);
        self.a * (i64::from(x) * scale) + self.b * (i64::from(y) * scale) + self.c
    }

    /// Change in value when stepping one pixel to the right.
    #[inline]
    pub fn x_step(&self) -> i64 {
        self.a * i64::from(SCALE)
    }
}

/// The edge functions of a closed polygon, in cyclic order
/// `(v0, v1), (v1, v2), ..., (v[N-1], v0)`. Unbiased.
pub fn edge_functions<const N: usize>(vertices: [ScreenPos; N]) -> [EdgeFunction; N] {
    std::array::from_fn(|i| EdgeFunction::from_edge(vertices[i], vertices[(i + 1) % N]))
}
