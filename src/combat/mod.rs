//! Turn-based combat: phases, damage formulas and the controller.

pub mod logic;
pub mod math;
pub mod types;

pub use logic::CombatController;
pub use math::*;
pub use types::*;
