//! Small hand-rolled math types.
//!
//! Geometry is authored in pixel coordinates (top-left origin, +Y down);
//! the transform uniform maps it to NDC in the vertex shader.

mod mat4;
mod rgba;
mod vec2;
mod vec3;

pub use mat4::Mat4;
pub use rgba::Rgba;
pub use vec2::Vec2;
pub use vec3::Vec3;
