//! Pixel buffer consumer for the rasterizer.
//!
//! Nothing in here decides coverage; it only writes the pixels
//! [`rasterise`](crate::rasterizer::rasterise) produces.

mod framebuffer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use renderer::Renderer;

use crate::math::vec2::Vec2;

/// A screen-space triangle ready for filling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec2; 3],
    pub color: u32,
}

impl Triangle {
    pub fn new(points: [Vec2; 3], color: u32) -> Self {
        Self { points, color }
    }
}

/// Colors in ARGB8888 format.
pub mod colors {
    pub const BACKGROUND: u32 = 0xFF000000;
    pub const RED: u32 = 0xFFFF0000;
    pub const GREEN: u32 = 0xFF00FF00;
    pub const BLUE: u32 = 0xFF0000FF;
    pub const WHITE: u32 = 0xFFFFFFFF;

    /// Splits ARGB8888 into `[r, g, b, a]`.
    pub fn to_rgba(color: u32) -> [u8; 4] {
        let [a, r, g, b] = color.to_be_bytes();
        [r, g, b, a]
    }
}
