//! Fixed-point triangle rasterization with a top-left fill rule.
//!
//! The heart of the crate is [`rasterizer::rasterise`]: three vertices in,
//! a lazy stream of covered pixel coordinates out, using integer arithmetic
//! only once the vertices are snapped to a `1/256` pixel grid. Triangles
//! that share an edge cover every pixel of their union exactly once.
//!
//! Around it sit the pieces needed to look at the result: a mesh loader,
//! a perspective projection, a color buffer that consumes the pixel stream,
//! and (with the `window` feature) an SDL2 window.
//!
//! # Quick Start
//!
//! ```
//! use trifill::prelude::*;
//!
//! let mut renderer = Renderer::new(320, 240);
//! let triangle = Triangle::new(
//!     [Vec2::new(50.0, 100.0), Vec2::new(100.0, 220.0), Vec2::new(200.0, 70.0)],
//!     colors::RED,
//! );
//! assert!(renderer.fill_triangle(&triangle) > 0);
//! ```

pub mod engine;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod rasterizer;
pub mod render;
#[cfg(feature = "window")]
pub mod window;

pub use engine::{Engine, FrameStats};
pub use mesh::{LoadError, Mesh};
pub use rasterizer::{rasterise, rasterise_convex, Pixels, Winding};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{Engine, FrameStats};
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::mesh::{LoadError, Mesh};
    pub use crate::rasterizer::{rasterise, rasterise_convex, Pixels, Winding, SCALE};
    pub use crate::render::{colors, FrameBuffer, Renderer, Triangle};
}
