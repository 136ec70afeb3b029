//! Owns the color buffer and fills triangles into it.

use std::path::Path;

use rayon::prelude::*;

use super::colors;
use super::framebuffer::FrameBuffer;
use super::Triangle;
use crate::rasterizer::{rasterise, Pixels};

/// Rows per parallel work item.
const STRIP_ROWS: u32 = 16;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; pixel_count(width, height)],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.color_buffer = vec![colors::BACKGROUND; pixel_count(width, height)];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    pub fn frame_buffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Fill one triangle, returning the number of pixels written.
    ///
    /// Only the part of the bounding box inside the buffer is scanned.
    pub fn fill_triangle(&mut self, triangle: &Triangle) -> usize {
        let [v0, v1, v2] = triangle.points;
        let mut fb = self.frame_buffer();
        let pixels = rasterise(v0, v1, v2).within(fb.columns(), fb.rows());
        fb.fill(pixels, triangle.color)
    }

    /// Fill triangles in order. Later triangles overwrite earlier ones.
    pub fn fill_triangles(&mut self, triangles: &[Triangle]) -> usize {
        triangles.iter().map(|t| self.fill_triangle(t)).sum()
    }

    /// Same result as [`fill_triangles`](Self::fill_triangles), with the
    /// buffer split into horizontal strips filled on the rayon pool.
    ///
    /// Each strip replays every triangle restricted to its own rows, in
    /// submission order, so overlapping triangles resolve identically.
    pub fn fill_triangles_par(&mut self, triangles: &[Triangle]) -> usize {
        if self.width == 0 {
            return 0;
        }
        let setups: Vec<(Pixels<3>, u32)> = triangles
            .iter()
            .map(|t| {
                let [v0, v1, v2] = t.points;
                (rasterise(v0, v1, v2), t.color)
            })
            .collect();
        let width = self.width;
        let chunk = STRIP_ROWS as usize * width as usize;

        self.color_buffer
            .par_chunks_mut(chunk)
            .enumerate()
            .map(|(i, strip)| {
                let mut fb = FrameBuffer::strip(strip, width, (i as u32 * STRIP_ROWS) as i32);
                setups
                    .iter()
                    .map(|(pixels, color)| {
                        fb.fill(pixels.within(fb.columns(), fb.rows()), *color)
                    })
                    .sum::<usize>()
            })
            .sum()
    }

    /// The color buffer as raw bytes, native-endian ARGB8888.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and u8 has alignment 1; the byte slice
        // borrows the same allocation for the same lifetime.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Copy the buffer into an RGBA image.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(colors::to_rgba(
                self.color_buffer[y as usize * self.width as usize + x as usize],
            ))
        })
    }

    /// Write the buffer to an image file; the format follows the extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }
}

/// Buffer length for a `width` x `height` image, computed without `u32`
/// overflow.
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;

    fn tri(points: [(f32, f32); 3], color: u32) -> Triangle {
        Triangle::new(points.map(Vec2::from), color)
    }

    fn reference() -> Triangle {
        tri([(50.0, 100.0), (100.0, 220.0), (200.0, 70.0)], colors::RED)
    }

    #[test]
    fn fill_writes_exactly_the_rasterised_pixels() {
        let mut r = Renderer::new(320, 240);
        let t = reference();
        let written = r.fill_triangle(&t);
        let [v0, v1, v2] = t.points;
        let expected: Vec<_> = rasterise(v0, v1, v2).collect();
        assert_eq!(written, expected.len());
        for &(x, y) in &expected {
            assert_eq!(r.get_pixel(x, y), Some(colors::RED));
        }
        let red = r.color_buffer.iter().filter(|&&c| c == colors::RED).count();
        assert_eq!(red, expected.len());
    }

    #[test]
    fn pixels_outside_buffer_are_not_counted() {
        let mut r = Renderer::new(10, 10);
        let t = tri([(-5.0, -5.0), (-5.0, 20.0), (20.0, -5.0)], colors::GREEN);
        let written = r.fill_triangle(&t);
        assert!(written > 0);
        assert!(written <= 100);
        assert_eq!(r.get_pixel(0, 0), Some(colors::GREEN));
    }

    #[test]
    fn far_off_screen_vertex_scans_only_the_buffer() {
        // A vertex near the clamp limit, as a projection close to w = 0
        // produces. The scan must stay inside the 16x16 buffer.
        let t = tri([(0.0, 0.0), (0.0, 16.0), (2_000_000.0, 8.0)], colors::BLUE);
        let [v0, v1, v2] = t.points;
        let full = rasterise(v0, v1, v2);
        assert!(full.bounds().width() > 1_000_000);

        let mut r = Renderer::new(16, 16);
        let fb = r.frame_buffer();
        let window = full.within(fb.columns(), fb.rows());
        assert_eq!(window.bounds().width(), 16);
        let expected = window.count();

        assert_eq!(r.fill_triangle(&t), expected);
        assert_eq!(r.get_pixel(15, 8), Some(colors::BLUE));
        let mut par = Renderer::new(16, 16);
        assert_eq!(par.fill_triangles_par(&[t]), expected);
        assert_eq!(par.color_buffer, r.color_buffer);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn pixel_count_does_not_wrap() {
        assert_eq!(pixel_count(70_000, 70_000), 4_900_000_000);
        assert_eq!(pixel_count(u32::MAX, 2), u32::MAX as usize * 2);
    }

    #[test]
    fn parallel_fill_matches_sequential() {
        let triangles = vec![
            reference(),
            tri([(0.0, 0.0), (0.0, 240.0), (320.0, 0.0)], colors::BLUE),
            tri([(10.5, 30.25), (40.0, 200.75), (300.0, 17.0)], colors::GREEN),
        ];
        let mut seq = Renderer::new(320, 240);
        let mut par = Renderer::new(320, 240);
        let n_seq = seq.fill_triangles(&triangles);
        let n_par = par.fill_triangles_par(&triangles);
        assert_eq!(n_seq, n_par);
        assert_eq!(seq.color_buffer, par.color_buffer);
    }

    #[test]
    fn parallel_fill_handles_partial_last_strip() {
        let triangles = vec![tri([(0.0, 0.0), (0.0, 37.0), (19.0, 0.0)], colors::WHITE)];
        let mut seq = Renderer::new(20, 37);
        let mut par = Renderer::new(20, 37);
        assert_eq!(seq.fill_triangles(&triangles), par.fill_triangles_par(&triangles));
        assert_eq!(seq.color_buffer, par.color_buffer);
    }

    #[test]
    fn image_export_keeps_channels() {
        let mut r = Renderer::new(2, 1);
        r.frame_buffer().set_pixel(1, 0, 0x80112233);
        let img = r.to_image();
        assert_eq!(img.get_pixel(1, 0).0, [0x11, 0x22, 0x33, 0x80]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0xFF]);
    }

    #[test]
    fn save_png_round_trips_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut r = Renderer::new(8, 4);
        r.fill_triangle(&tri([(0.0, 0.0), (0.0, 4.0), (8.0, 0.0)], colors::RED));
        r.save_png(&path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn as_bytes_covers_whole_buffer() {
        let r = Renderer::new(3, 2);
        assert_eq!(r.as_bytes().len(), 24);
    }
}
