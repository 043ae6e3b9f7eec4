//! wgpu render backend for dothack.
//!
//! Draws the world layer of a [`dothack_render::Frame`]: every rectangle,
//! circle and texture becomes one instanced quad, batched by texture in
//! painter's order. Screen-space UI is left to the caller.
//!
//! # Invariants
//! - The renderer never mutates game state.
//! - Colours are blended in gamma space on a non-sRGB surface, so byte
//!   colours show up on screen unchanged.

mod batch;
mod context;
mod gpu;
mod shaders;

pub use batch::{Batch, QuadInstance, build_batches};
pub use context::{GpuContext, GpuError};
pub use gpu::WgpuRenderer;
