//! Perspective projection and the mapping from clip space to pixels.

use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Near plane distance (must be > 0).
    z_near: f32,
    /// Far plane distance (must be > z_near).
    z_far: f32,
}

impl Projection {
    pub fn new(z_near: f32, z_far: f32) -> Self {
        Self { z_near, z_far }
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_gl(self.z_near, self.z_far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(0.1, 1000.0)
    }
}

/// Perspective-divide a clip-space position and map it to pixel coordinates.
///
/// Normalised x and y in `[-1, 1]` stretch over `[0, width]` and
/// `[0, height]`. The y axis is not flipped, so clip-space up is screen down.
pub fn screen_project(clip: Vec4, width: u32, height: u32) -> Vec2 {
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;
    Vec2::new(
        clip.x / clip.w * half_w + half_w,
        clip.y / clip.w * half_h + half_h,
    )
}
