//! Rendering adapter: renderer-agnostic frame description.
//!
//! # Invariants
//! - Rendering cannot mutate world truth; frames derive from world state and view.
//! - World-space commands go through the frame camera, screen-space commands
//!   are in window pixels with y growing downward.
//!
//! Backends (the wgpu renderer, the debug text renderer) consume a [`Frame`]
//! and never look at the world directly.

mod camera;
mod frame;
mod renderer;
mod scene;
pub mod tiles;

pub use camera::{Camera2D, Viewport};
pub use frame::{DrawCommand, Frame, TextureId, TextureInfo};
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{Scene, Style};

pub fn crate_info() -> &'static str {
    "dothack-render v0.1.0"
}
