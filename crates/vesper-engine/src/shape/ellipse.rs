use crate::batch::GeometryBatch;
use crate::coords::{Rgba, Vec2, Vec3};

use super::{DEFAULT_RESOLUTION, Shape};

/// Ellipse centered at `pos` with independent axis extents.
///
/// `width`/`height` are per-axis radii, not a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    pub pos: Vec3,
    pub width: f32,
    pub height: f32,
    pub resolution: u32,
    pub color: Rgba,
}

impl Default for EllipseShape {
    fn default() -> Self {
        Self {
            pos: Vec3::zero(),
            width: 0.0,
            height: 0.0,
            resolution: DEFAULT_RESOLUTION,
            color: Rgba::WHITE,
        }
    }
}

impl EllipseShape {
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

    /// Number of perimeter segments of the tessellated fan.
    #[inline]
    pub fn res(&mut self, resolution: u32) -> &mut Self {
        self.resolution = resolution;
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
    /// Appends a default ellipse to the pending list and returns a handle for
    /// chained configuration, valid until the next clear.
    pub fn ellipse(&mut self) -> &mut EllipseShape {
        match self.push_shape(Shape::Ellipse(EllipseShape::default())) {
            Shape::Ellipse(s) => s,
            _ => unreachable!("pushed an Ellipse"),
        }
    }
}
