//! GPU device + surface management.
//!
//! Owns the wgpu device/queue and the configured surface, acquires a texture
//! view per frame, and maps surface errors to recovery actions. The rest of
//! the engine only sees `&wgpu::Device` / `&wgpu::Queue` and a per-frame
//! [`GpuFrame`].

mod gpu;

pub use gpu::{Gpu, GpuConfig, GpuFrame, SurfaceErrorAction};
