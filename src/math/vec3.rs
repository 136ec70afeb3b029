use std::ops::Sub;

/// A model-space position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Builds a vertex from the first three floats of `chunk`.
    ///
    /// # Panics
    /// Panics if `chunk` holds fewer than three values.
    pub fn from_slice(chunk: &[f32]) -> Self {
        Self::new(chunk[0], chunk[1], chunk[2])
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
