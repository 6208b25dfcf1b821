use crate::batch::GeometryBatch;
use crate::coords::{Rgba, Vec2, Vec3};

use super::Shape;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectShape {
    pub pos: Vec3,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
}

impl RectShape {
    #[inline]
    pub fn xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.pos = Vec3::new(x, y, z);
        self
    }

    #[inline]
    pub fn xy(&mut self, pos: impl Into<Vec2>) -> &mut Self {
        let p = pos.into();
        self.pos.x = p.x;
        self.pos.y = p.y;
        self
    }

    #[inline]
    pub fn x(&mut self, x: f32) -> &mut Self {
        self.pos.x = x;
        self
    }

    #[inline]
    pub fn y(&mut self, y: f32) -> &mut Self {
        self.pos.y = y;
        self
    }

    #[inline]
    pub fn wh(&mut self, width: f32, height: f32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    pub fn w(&mut self, width: f32) -> &mut Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn h(&mut self, height: f32) -> &mut Self {
        self.height = height;
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
    /// Appends a default rectangle to the pending list and returns a handle
    /// for chained configuration, valid until the next clear.
    pub fn rect(&mut self) -> &mut RectShape {
        match self.push_shape(Shape::Rect(RectShape::default())) {
            Shape::Rect(s) => s,
            _ => unreachable!("pushed a Rect"),
        }
    }
}
