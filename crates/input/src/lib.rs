//! Input: keyboard state and bindings mapped to high-level game actions.
//!
//! # Invariants
//! - The kernel consumes [`Action`]s, never raw key events.
//! - Windowing backends translate their key codes into [`Key`] at the edge.

pub mod action;
pub mod bindings;
pub mod state;

pub use action::Action;
pub use bindings::KeyBindings;
pub use state::{InputState, Key};

pub fn crate_info() -> &'static str {
    "dothack-input v0.1.0"
}
