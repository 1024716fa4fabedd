//! Item system: types, generation, loot rolls and the inventory.

pub mod drops;
pub mod generation;
pub mod inventory;
pub mod types;

pub use drops::*;
pub use generation::*;
pub use inventory::Inventory;
pub use types::*;
