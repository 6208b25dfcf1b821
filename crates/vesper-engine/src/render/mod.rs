//! GPU rendering subsystem.
//!
//! The canvas consumes the frame's [`GeometryBatch`](crate::batch::GeometryBatch)
//! and issues GPU commands via wgpu. It owns its GPU resources (pipeline,
//! buffer slots, multisample target).
//!
//! Convention:
//! - CPU geometry is in pixel coordinates (top-left origin, +Y down).
//! - The vertex shader converts to NDC through the transform uniform.

mod buffer;
mod canvas;
mod ctx;

pub use buffer::BufferSlot;
pub use canvas::{Canvas, CanvasOptions};
pub use ctx::{RenderCtx, RenderTarget};
