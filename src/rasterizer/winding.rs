use super::fixed::{quantise, ScreenPos};
use crate::math::vec2::Vec2;

/// Twice the signed area of a triangle in subpixel units squared.
///
/// Negative for the winding the rasterizer fills (counter-clockwise on a
/// y-down grid), positive for the opposite one, zero when collinear.
pub fn signed_area_x2(v0: ScreenPos, v1: ScreenPos, v2: ScreenPos) -> i64 {
    let (x0, y0) = (i64::from(v0.x), i64::from(v0.y));
    let ex1 = (i64::from(v1.x) - x0, i64::from(v1.y) - y0);
    let ex2 = (i64::from(v2.x) - x0, i64::from(v2.y) - y0);
    ex1.0 * ex2.1 - ex1.1 * ex2.0
}

/// Vertex order of a triangle as seen on a y-down pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    /// The order [`rasterise`](super::rasterise) expects.
    CounterClockwise,
    /// Fills nothing; swap two vertices to rasterise it.
    Clockwise,
    /// All three vertices collinear after quantisation.
    Degenerate,
}

impl Winding {
    /// Classifies the triangle the way the rasterizer will see it, i.e. after
    /// snapping to subpixels.
    pub fn of(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        Self::of_quantised(quantise(v0), quantise(v1), quantise(v2))
    }

    pub fn of_quantised(v0: ScreenPos, v1: ScreenPos, v2: ScreenPos) -> Self {
        match signed_area_x2(v0, v1, v2) {
            area if area < 0 => Winding::CounterClockwise,
            area if area > 0 => Winding::Clockwise,
            _ => Winding::Degenerate,
        }
    }

    pub fn is_fillable(self) -> bool {
        self == Winding::CounterClockwise
    }
}
