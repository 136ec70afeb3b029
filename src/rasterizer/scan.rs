//! The bounding-box scan.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use super::bounds::BoundingBox;
use super::edgefunction::EdgeFunction;

/// Lazy, row-major stream of the pixels covered by a convex polygon.
///
/// Rows go top to bottom (`y` ascending) and each row left to right. A pixel
/// is produced iff every biased edge function is `>= 0` at
/// `(x*SCALE, y*SCALE)`. Within a row the edge values are stepped by
/// `a*SCALE` per pixel; each row restarts from a direct evaluation, so the
/// values are always exact.
///
/// The iterator is cheap to clone, and a clone replays the same sequence
/// from the same position.
#[derive(Clone, Debug)]
pub struct Pixels<const N: usize> {
    edges: [EdgeFunction; N],
    bounds: BoundingBox,
    x: i32,
    y: i32,
    values: [i64; N],
}

impl<const N: usize> Pixels<N> {
    /// Starts a scan of `bounds` against already biased `edges`.
    pub fn new(edges: [EdgeFunction; N], bounds: BoundingBox) -> Self {
        let mut scan = Self {
            edges,
            bounds,
            x: bounds.min_x,
            y: bounds.min_y,
            values: [0; N],
        };
        scan.start_row();
        scan
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Whether `(x, y)` passes the coverage test, independent of scan
    /// position.
    pub fn covers(&self, x: i32, y: i32) -> bool {
        self.bounds.contains(x, y) && self.edges.iter().all(|e| e.at_pixel(x, y) >= 0)
    }

    /// A fresh scan of only the rows in `rows`.
    ///
    /// Concatenating the strips of a partition of the bounding box gives the
    /// full scan back, so strips can be handed to separate workers.
    pub fn rows(&self, rows: RangeInclusive<i32>) -> Self {
        Self::new(self.edges, self.bounds.clip_rows(rows))
    }

    /// A fresh scan limited to a window of columns and rows.
    ///
    /// Only the visited rectangle shrinks; every pixel it still visits gets
    /// the same coverage test, so the result is the full scan with pixels
    /// outside the window removed.
    pub fn within(&self, columns: RangeInclusive<i32>, rows: RangeInclusive<i32>) -> Self {
        Self::new(self.edges, self.bounds.clip_columns(columns).clip_rows(rows))
    }

    fn start_row(&mut self) {
        self.x = self.bounds.min_x;
        if self.bounds.is_empty() || self.y > self.bounds.max_y {
            return;
        }
        for (value, edge) in self.values.iter_mut().zip(&self.edges) {
            *value = edge.at_pixel(self.bounds.min_x, self.y);
        }
    }
}

impl<const N: usize> Iterator for Pixels<N> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.bounds.is_empty() {
            return None;
        }
        while self.y <= self.bounds.max_y {
            while self.x <= self.bounds.max_x {
                let x = self.x;
                let inside = self.values.iter().all(|&w| w >= 0);
                self.x += 1;
                for (value, edge) in self.values.iter_mut().zip(&self.edges) {
                    *value += edge.x_step();
                }
                if inside {
                    return Some((x, self.y));
                }
            }
            self.y += 1;
            self.start_row();
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.y > self.bounds.max_y {
            return (0, Some(0));
        }
        let rest_of_row = span(self.x, self.bounds.max_x);
        let later_rows = span(self.y + 1, self.bounds.max_y) * self.bounds.width();
        (0, usize::try_from(rest_of_row + later_rows).ok())
    }
}

impl<const N: usize> FusedIterator for Pixels<N> {}

fn span(lo: i32, hi: i32) -> u64 {
    (i64::from(hi) - i64::from(lo) + 1).max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::edgefunction::edge_functions;
    use crate::rasterizer::fixed::{ScreenPos, SCALE};

    fn square_scan() -> Pixels<4> {
        let verts = [(0, 0), (0, 4), (4, 4), (4, 0)].map(|(x, y)| ScreenPos::new(x * SCALE, y * SCALE));
        let edges = edge_functions(verts).map(EdgeFunction::biased);
        Pixels::new(edges, BoundingBox::from_points(&verts))
    }

    #[test]
    fn square_is_half_open() {
        let pixels: Vec<_> = square_scan().collect();
        // Top and left edges lose ties, bottom and right keep them.
        assert_eq!(pixels.len(), 16);
        assert_eq!(pixels.first(), Some(&(1, 1)));
        assert_eq!(pixels.last(), Some(&(4, 4)));
        assert!(pixels.iter().all(|&(x, y)| (1..=4).contains(&x) && (1..=4).contains(&y)));
    }

    #[test]
    fn visits_in_row_major_order() {
        let pixels: Vec<_> = square_scan().collect();
        let mut sorted = pixels.clone();
        sorted.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(pixels, sorted);
    }

    #[test]
    fn clone_replays_remaining_sequence() {
        let mut scan = square_scan();
        scan.next();
        scan.next();
        let replay = scan.clone();
        assert_eq!(scan.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }

    #[test]
    fn covers_agrees_with_scan() {
        let scan = square_scan();
        let emitted: Vec<_> = scan.clone().collect();
        let b = scan.bounds();
        for y in b.min_y - 1..=b.max_y + 1 {
            for x in b.min_x - 1..=b.max_x + 1 {
                assert_eq!(scan.covers(x, y), emitted.contains(&(x, y)), "({x}, {y})");
            }
        }
    }

    #[test]
    fn row_strips_concatenate_to_full_scan() {
        let scan = square_scan();
        let strips: Vec<_> = [0..=1, 2..=2, 3..=10]
            .into_iter()
            .flat_map(|r| scan.rows(r))
            .collect();
        assert_eq!(strips, scan.collect::<Vec<_>>());
    }

    #[test]
    fn size_hint_bounds_the_output() {
        let scan = square_scan();
        let (_, upper) = scan.size_hint();
        assert_eq!(upper, Some(25));
        let mut done = scan.clone();
        done.by_ref().for_each(drop);
        assert_eq!(done.size_hint(), (0, Some(0)));
        assert_eq!(done.next(), None);
    }

    #[test]
    fn empty_box_yields_nothing() {
        let scan = square_scan();
        assert_eq!(scan.rows(100..=200).count(), 0);
        assert_eq!(scan.within(100..=200, 0..=4).count(), 0);
    }

    #[test]
    fn window_keeps_only_inside_pixels() {
        let scan = square_scan();
        let expected: Vec<_> = scan
            .clone()
            .filter(|&(x, y)| (2..=3).contains(&x) && (0..=2).contains(&y))
            .collect();
        let window = scan.within(2..=3, 0..=2);
        assert_eq!(window.bounds().width(), 2);
        assert_eq!(window.collect::<Vec<_>>(), expected);
    }
}
