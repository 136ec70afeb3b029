//! 4x4 transformation matrix.
//!
//! # Convention
//! - Storage is row-major: `data[row][col]`
//! - Vectors are **column vectors** on the right: `Mat4 * Vec4`
//! - Transforms chain **right-to-left**: `proj * view * v` applies `view` first

use std::ops::Mul;

use super::vec4::Vec4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        let mut data = [[0.0; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Mat4::new(data)
    }

    /// Translation lives in the last column.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Mat4::identity();
        m.data[0][3] = x;
        m.data[1][3] = y;
        m.data[2][3] = z;
        m
    }

    /// OpenGL-style right-handed perspective with the image plane at `near`.
    ///
    /// The visible half-extent at the near plane is `near`, so the horizontal
    /// and vertical field of view are both 90 degrees before the screen
    /// mapping stretches to the framebuffer aspect ratio.
    pub fn perspective_gl(near: f32, far: f32) -> Self {
        Mat4::new([
            [near, 0.0, 0.0, 0.0],
            [0.0, near, 0.0, 0.0],
            [0.0, 0.0, -(far + near) / (far - near), -(2.0 * near * far) / (far - near)],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }
        Mat4::new(out)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        let v = v.to_array();
        let dot = |row: &[f32; 4]| row.iter().zip(v.iter()).map(|(m, c)| m * c).sum::<f32>();
        Vec4::new(
            dot(&self.data[0]),
            dot(&self.data[1]),
            dot(&self.data[2]),
            dot(&self.data[3]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn identity_is_neutral() {
        let v = Vec4::new(1.0, -2.0, 3.0, 1.0);
        assert_eq!(Mat4::identity() * v, v);
        let t = Mat4::translation(1.0, 2.0, 3.0);
        assert_eq!(Mat4::identity() * t, t);
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let t = Mat4::translation(0.0, 0.0, -3.0);
        let p = t * Vec4::point(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec4::new(1.0, 1.0, -2.0, 1.0));
        let d = t * Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(d, Vec4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn perspective_maps_near_plane_to_minus_one() {
        let p = Mat4::perspective_gl(0.1, 1000.0);
        let clip = p * Vec4::new(0.0, 0.0, -0.1, 1.0);
        assert_relative_eq!(clip.z / clip.w, -1.0, epsilon = 1e-4);
        let clip = p * Vec4::new(0.0, 0.0, -1000.0, 1.0);
        assert_relative_eq!(clip.z / clip.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn perspective_w_is_view_depth() {
        let p = Mat4::perspective_gl(0.1, 100.0);
        let clip = p * Vec4::new(0.5, 0.5, -3.0, 1.0);
        assert_relative_eq!(clip.w, 3.0);
        assert_relative_eq!(p.get(3, 2), -1.0);
    }
}
