//! Window + frame loop.
//!
//! Drives a single window: creates it, binds the GPU context and a
//! [`Canvas`](crate::render::Canvas), and calls the sketch back once per
//! frame. Input plumbing beyond "Escape closes the window" is out of scope.

mod runtime;

pub use runtime::{FrameInfo, Runtime, RuntimeConfig, Sketch};
