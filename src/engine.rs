//! Mesh rendering pipeline.
//!
//! The [`Engine`] runs each mesh triangle through view and projection
//! transforms, maps it to pixels, culls everything the rasterizer would not
//! fill, and hands the rest to the [`Renderer`].

use log::debug;

use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;
use crate::projection::{screen_project, Projection};
use crate::rasterizer::Winding;
use crate::render::{colors, Renderer, Triangle};

/// Counters for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Triangles in the mesh.
    pub submitted: usize,
    /// Triangles dropped: facing away, degenerate on screen, or with a
    /// vertex at or behind the eye.
    pub culled: usize,
    /// Triangles handed to the rasterizer.
    pub rasterised: usize,
    /// Pixels written to the buffer.
    pub pixels: usize,
}

pub struct Engine {
    renderer: Renderer,
    mesh: Mesh,
    projection: Projection,
    view_offset: Vec3,
    color: u32,
    parallel: bool,
}

impl Engine {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            renderer: Renderer::new(width, height),
            mesh: Mesh::default(),
            projection: Projection::default(),
            view_offset: Vec3::new(0.0, 0.0, -3.0),
            color: colors::RED,
            parallel: false,
        }
    }

    pub fn set_mesh(&mut self, mesh: Mesh) {
        self.mesh = mesh;
    }

    /// Translation applied to the mesh before projection.
    pub fn set_view_offset(&mut self, offset: Vec3) {
        self.view_offset = offset;
    }

    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    /// Fill triangles on the rayon pool instead of the calling thread.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Draw a screen-space triangle over the current frame.
    pub fn fill_triangle(&mut self, triangle: &Triangle) -> usize {
        self.renderer.fill_triangle(triangle)
    }

    /// Returns the rendered frame as bytes (ARGB8888 format).
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Screen positions of a model-space triangle, or `None` when a vertex
    /// is at or behind the eye.
    pub fn project_triangle(&self, triangle: &[Vec3; 3]) -> Option<[Vec2; 3]> {
        let view = Mat4::translation(self.view_offset.x, self.view_offset.y, self.view_offset.z);
        let transform = self.projection.matrix() * view;
        let (w, h) = (self.renderer.width(), self.renderer.height());

        let mut out = [Vec2::ZERO; 3];
        for (slot, v) in out.iter_mut().zip(triangle) {
            let clip = transform * Vec4::point(*v);
            if clip.w <= 0.0 {
                return None;
            }
            *slot = screen_project(clip, w, h);
        }
        Some(out)
    }

    /// Clear to `background` and draw the mesh.
    pub fn render(&mut self, background: u32) -> FrameStats {
        self.renderer.clear(background);

        let mut stats = FrameStats {
            submitted: self.mesh.len(),
            ..FrameStats::default()
        };
        let mut visible = Vec::with_capacity(self.mesh.len());
        for tri in self.mesh.triangles() {
            match self.project_triangle(tri) {
                Some([a, b, c]) if Winding::of(a, b, c).is_fillable() => {
                    visible.push(Triangle::new([a, b, c], self.color));
                }
                _ => stats.culled += 1,
            }
        }
        stats.rasterised = visible.len();
        stats.pixels = if self.parallel {
            self.renderer.fill_triangles_par(&visible)
        } else {
            self.renderer.fill_triangles(&visible)
        };

        debug!(
            "frame: {} submitted, {} culled, {} rasterised, {} pixels",
            stats.submitted, stats.culled, stats.rasterised, stats.pixels
        );
        stats
    }
}
