//! Vesper engine crate.
//!
//! Immediate-mode 2D drawing: record shapes on a canvas each frame, have them
//! tessellated into one batched vertex/index stream, and draw the whole batch
//! with a single indexed call.

pub mod batch;
pub mod coords;
pub mod device;
pub mod logging;
pub mod render;
pub mod shape;
pub mod tessellate;
pub mod window;
