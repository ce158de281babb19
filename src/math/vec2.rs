use std::ops::{Add, Div, Mul, Sub};

use super::vec3::Vec3;
use super::vec4::Vec4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Ground-plane footprint of a 3D point: keeps x and z, drops the
    /// vertical axis. The result's `y` holds the source's `z`.
    pub const fn from_xz(v: Vec3) -> Self {
        Self { x: v.x, y: v.z }
    }

    /// Footprint of a homogeneous point, ignoring w.
    pub const fn from_xz4(v: Vec4) -> Self {
        Self { x: v.x, y: v.z }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn footprint_drops_vertical_axis() {
        let p = Vec2::from_xz(Vec3::new(1.0, 7.0, -3.0));
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, -3.0);
    }

    #[test]
    fn dot_product() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_relative_eq!(a.dot(b), 11.0);
    }
}
