//! Game kernel: authoritative world state and per-frame stepping.
//!
//! # Invariants
//! - The world is owned by whoever drives the loop and is passed by reference.
//! - All rate-based updates scale with the frame delta.
//! - The enemy count is fixed at world creation.

pub mod config;
pub mod game;
pub mod pursuit;
pub mod session;
pub mod smoothing;
pub mod world;

pub use config::{BuildMode, GameConfig, SimConfig};
pub use game::Game;
pub use session::{LoopState, Session};
pub use world::{Enemy, Player, World, WorldSummary};

pub fn crate_info() -> &'static str {
    "dothack-kernel v0.1.0"
}
