//! Shared types used across the dothack crates: colours and the slot arena
//! entities live in.

mod arena;
mod types;

pub use arena::{Arena, ArenaError, SlotId};
pub use types::Rgba;

pub fn crate_info() -> &'static str {
    "dothack-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
