//! Arithmetic challenges answered in combat.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
