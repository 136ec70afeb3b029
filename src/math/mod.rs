//! Small float vector and matrix types used before quantisation.
//!
//! Everything in here runs ahead of the rasterizer. Once a vertex has been
//! projected to the screen and snapped to subpixels, no float is touched
//! again.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;
