use std::ops::Add;

/// A screen-space vertex in pixel units, fractional positions allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_componentwise() {
        let a = Vec2::new(1.5, -2.0);
        let b = Vec2::new(0.25, 4.0);
        assert_eq!(a + b, Vec2::new(1.75, 2.0));
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Vec2::from((2.5, -1.0)), Vec2::new(2.5, -1.0));
    }
}
