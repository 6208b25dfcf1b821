use crate::batch::GeometryBatch;
use crate::coords::{Rgba, Vec2, Vec3};

use super::Shape;

/// Triangle given by three independent points, emitted in configuration
/// order. Winding is whatever the caller supplies; nothing reorders it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleShape {
    pub points: [Vec3; 3],
    pub color: Rgba,
}

impl TriangleShape {
    /// Sets all three corners at once (2D convenience, z = 0).
    #[inline]
    pub fn points(
        &mut self,
        a: impl Into<Vec2>,
        b: impl Into<Vec2>,
        c: impl Into<Vec2>,
    ) -> &mut Self {
        let (a, b, c) = (a.into(), b.into(), c.into());
        self.points = [
            Vec3::new(a.x, a.y, 0.0),
            Vec3::new(b.x, b.y, 0.0),
            Vec3::new(c.x, c.y, 0.0),
        ];
        self
    }

    #[inline]
    pub fn a(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.points[0] = Vec3::new(x, y, z);
        self
    }

    #[inline]
    pub fn b(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.points[1] = Vec3::new(x, y, z);
        self
    }

    #[inline]
    pub fn c(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.points[2] = Vec3::new(x, y, z);
        self
    }

    #[inline]
    pub fn rgba(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.color = Rgba::new(r, g, b, a);
        self
    }

    #[inline]
    pub fn rgb(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        self.color.r = r;
        self.color.g = g;
        self.color.b = b;
        self
    }

    #[inline]
    pub fn value(&mut self, v: f32, a: f32) -> &mut Self {
        self.color = Rgba::value(v, a);
        self
    }
}

impl GeometryBatch {
    /// Appends a default triangle to the pending list and returns a handle
    /// for chained configuration, valid until the next clear.
    pub fn triangle(&mut self) -> &mut TriangleShape {
        match self.push_shape(Shape::Triangle(TriangleShape::default())) {
            Shape::Triangle(s) => s,
            _ => unreachable!("pushed a Triangle"),
        }
    }
}
