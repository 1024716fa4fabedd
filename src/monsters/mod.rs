//! Monsters: catalog, spawning and rewards.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
