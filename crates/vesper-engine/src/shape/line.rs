use crate::batch::GeometryBatch;
use crate::coords::{Rgba, Vec2, Vec3};

use super::Shape;

/// Line segment expanded into a quad of the given thickness at tessellation
/// time. A zero-length segment (`from == to`) emits nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub from: Vec3,
    pub to: Vec3,
    pub thickness: f32,
    pub color: Rgba,
}

impl Default for LineShape {
    fn default() -> Self {
        Self {
            from: Vec3::zero(),
            to: Vec3::zero(),
            thickness: 1.0,
            color: Rgba::WHITE,
        }
    }
}

impl LineShape {
    #[inline]
    pub fn from(&mut self, p: impl Into<Vec2>) -> &mut Self {
        let p = p.into();
        self.from.x = p.x;
        self.from.y = p.y;
        self
    }

    #[inline]
    pub fn to(&mut self, p: impl Into<Vec2>) -> &mut Self {
        let p = p.into();
        self.to.x = p.x;
        self.to.y = p.y;
        self
    }

    #[inline]
    pub fn from_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.from = Vec3::new(x, y, z);
        self
    }

    #[inline]
    pub fn to_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.to = Vec3::new(x, y, z);
        self
    }

    /// Full quad width across the segment.
    #[inline]
    pub fn thickness(&mut self, thickness: f32) -> &mut Self {
        self.thickness = thickness;
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
    /// Appends a default line to the pending list and returns a handle for
    /// chained configuration, valid until the next clear.
    pub fn line(&mut self) -> &mut LineShape {
        match self.push_shape(Shape::Line(LineShape::default())) {
            Shape::Line(s) => s,
            _ => unreachable!("pushed a Line"),
        }
    }
}
