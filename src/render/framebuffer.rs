//! Frame buffer view for 2D pixel access.

use std::ops::RangeInclusive;

/// A borrowed view into an ARGB8888 color buffer.
///
/// Wraps a 1D slice with width/height metadata for bounds-checked 2D access.
/// The view may cover a horizontal strip of a larger image, in which case
/// `first_row` is the image row of the slice's first line and coordinates
/// passed in are still image coordinates.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
    first_row: i32,
}

impl<'a> FrameBuffer<'a> {
    /// A view over a whole image.
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            width as usize * height as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
            first_row: 0,
        }
    }

    /// A view over whole rows starting at image row `first_row`.
    pub fn strip(color_buffer: &'a mut [u32], width: u32, first_row: i32) -> Self {
        debug_assert!(width > 0 && color_buffer.len() % width as usize == 0);
        let height = (color_buffer.len() / width.max(1) as usize) as u32;
        Self {
            color_buffer,
            width,
            height,
            first_row,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Image columns this view covers. Empty when `width` is zero.
    pub fn columns(&self) -> RangeInclusive<i32> {
        0..=self.width as i32 - 1
    }

    /// Image rows this view covers. Empty when `height` is zero.
    pub fn rows(&self) -> RangeInclusive<i32> {
        self.first_row..=self.first_row + self.height as i32 - 1
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let row = y - self.first_row;
        if x >= 0 && x < self.width as i32 && row >= 0 && row < self.height as i32 {
            Some(row as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Write a pixel. Out-of-bounds coordinates are ignored and return false.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.color_buffer[i] = color;
                true
            }
            None => false,
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.color_buffer[i])
    }

    /// Writes every pixel of a stream, returning how many landed in bounds.
    pub fn fill<I>(&mut self, pixels: I, color: u32) -> usize
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        pixels
            .into_iter()
            .filter(|&(x, y)| self.set_pixel(x, y, color))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut data = vec![0u32; 6];
        let mut fb = FrameBuffer::new(&mut data, 3, 2);
        assert!(fb.set_pixel(2, 1, 7));
        assert!(!fb.set_pixel(3, 0, 7));
        assert!(!fb.set_pixel(-1, 0, 7));
        assert!(!fb.set_pixel(0, 2, 7));
        assert_eq!(fb.get_pixel(2, 1), Some(7));
        assert_eq!(fb.get_pixel(0, -1), None);
        assert_eq!(data, vec![0, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn strip_uses_image_coordinates() {
        let mut data = vec![0u32; 8];
        let mut fb = FrameBuffer::strip(&mut data, 4, 10);
        assert_eq!(fb.rows(), 10..=11);
        assert_eq!(fb.columns(), 0..=3);
        assert!(!fb.set_pixel(0, 9, 1));
        assert!(fb.set_pixel(1, 11, 1));
        assert_eq!(data[5], 1);
    }

    #[test]
    fn fill_counts_in_bounds_pixels() {
        let mut data = vec![0u32; 4];
        let mut fb = FrameBuffer::new(&mut data, 2, 2);
        let written = fb.fill([(0, 0), (1, 1), (5, 5), (-1, 0)], 0xFF00FF00);
        assert_eq!(written, 2);
        assert_eq!(data, vec![0xFF00FF00, 0, 0, 0xFF00FF00]);
    }
}
