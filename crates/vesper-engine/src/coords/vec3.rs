use core::ops::{Add, Mul, Sub};

use super::Vec2;

/// 3D point/vector. Shapes carry a `z` so overlap order can be steered by the
/// transform if an embedder wants it; the tessellators otherwise treat
/// geometry as planar.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the unit vector, or `None` for a zero-length input.
    #[inline]
    pub fn normalized(self) -> Option<Vec3> {
        let len = self.length();
        if len > 0.0 {
            Some(Vec3::new(self.x / len, self.y / len, self.z / len))
        } else {
            None
        }
    }

    /// Rotates 90° counter-clockwise in the XY plane, preserving `z = 0`.
    #[inline]
    pub fn perp_xy(self) -> Vec3 {
        Vec3::new(-self.y, self.x, 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_unit_length() {
        let v = Vec3::new(3.0, 4.0, 0.0).normalized().unwrap();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert_eq!(v, Vec3::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn normalized_zero_is_none() {
        assert!(Vec3::zero().normalized().is_none());
    }

    #[test]
    fn perp_is_perpendicular_in_plane() {
        let v = Vec3::new(2.0, 5.0, 0.0);
        let p = v.perp_xy();
        // Dot product in XY vanishes.
        assert_eq!(v.x * p.x + v.y * p.y, 0.0);
        assert_eq!(p, Vec3::new(-5.0, 2.0, 0.0));
    }
}
