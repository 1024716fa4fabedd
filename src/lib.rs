//! Math Legends - turn-based arithmetic combat.
//!
//! The game logic lives here so it can be tested and simulated without the
//! terminal frontend. `CombatController` is the entry point.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod monsters;
pub mod problems;
pub mod shop;
pub mod simulator;

pub use character::{Coins, Player};
pub use combat::{CombatController, CombatEvent, CombatPhase, PendingEffect, Stance, Verdict};
pub use crate::core::{ConfigError, GameConfig, GameError, GameState, StumblePenalty};
pub use items::{Inventory, Item};
pub use monsters::Monster;
pub use problems::{Operation, Problem};
pub use shop::Shop;
