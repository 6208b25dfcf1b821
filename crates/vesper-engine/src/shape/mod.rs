//! Shape descriptors and their fluent configuration surface.
//!
//! Responsibilities:
//! - define the closed set of drawable shape kinds
//! - expose chainable setters so call sites read like
//!   `canvas.circle().xy(pos).radius(40.0).rgb(1.0, 0.4, 0.1)`
//! - keep per-shape code isolated per shape file
//!
//! Setters perform no validation; a negative radius or zero resolution is
//! stored as given and produces degenerate-but-defined geometry at
//! tessellation time.
//!
//! Extending the set:
//! - add a shape module here with its struct + setters
//! - add a variant to [`Shape`]
//! - add a builder entry point on `GeometryBatch` inside that shape module
//! - add a matching tessellator under `tessellate::*`

mod circle;
mod ellipse;
mod line;
mod rect;
mod triangle;

pub use circle::CircleShape;
pub use ellipse::EllipseShape;
pub use line::LineShape;
pub use rect::RectShape;
pub use triangle::TriangleShape;

/// Default fan density for circles and ellipses.
pub const DEFAULT_RESOLUTION: u32 = 90;

/// A pending shape, owned by the batch until the next clear.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(RectShape),
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Triangle(TriangleShape),
    Line(LineShape),
}
