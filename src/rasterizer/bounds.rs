use std::ops::RangeInclusive;

use super::fixed::ScreenPos;

/// Inclusive pixel rectangle around a set of subpixel vertices.
///
/// Both ends are floored, which is as tight as it can be: a pixel past the
/// floored maximum lies strictly outside every vertex and fails an edge test
/// anyway. The box only limits the scan; the edge tests still decide
/// coverage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// An empty box from no points.
    pub fn from_points(points: &[ScreenPos]) -> Self {
        let mut bounds = Self {
            min_x: i32::MAX,
            min_y: i32::MAX,
            max_x: i32::MIN,
            max_y: i32::MIN,
        };
        for p in points {
            let (x, y) = p.pixel();
            bounds.min_x = bounds.min_x.min(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_x = bounds.max_x.max(x);
            bounds.max_y = bounds.max_y.max(y);
        }
        bounds
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    pub fn width(&self) -> u64 {
        span(self.min_x, self.max_x)
    }

    pub fn height(&self) -> u64 {
        span(self.min_y, self.max_y)
    }

    /// Number of pixels the scan visits.
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// The part of this box inside the given rows.
    pub fn clip_rows(&self, rows: RangeInclusive<i32>) -> Self {
        Self {
            min_y: self.min_y.max(*rows.start()),
            max_y: self.max_y.min(*rows.end()),
            ..*self
        }
    }

    /// The part of this box inside the given columns.
    pub fn clip_columns(&self, columns: RangeInclusive<i32>) -> Self {
        Self {
            min_x: self.min_x.max(*columns.start()),
            max_x: self.max_x.min(*columns.end()),
            ..*self
        }
    }
}

fn span(lo: i32, hi: i32) -> u64 {
    if hi < lo {
        0
    } else {
        (i64::from(hi) - i64::from(lo) + 1) as u64
    }
}
