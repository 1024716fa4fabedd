//! Game balance simulator for Monte Carlo analysis.
//!
//! Runs thousands of scripted playthroughs through the real
//! `CombatController` to analyze:
//! - How far a player of a given accuracy gets
//! - Damage dealt and taken per run
//! - Coin income against merchant prices
//! - Loot drop rates and rarity spread

mod config;
mod loot_sim;
mod report;
mod runner;

pub use config::SimConfig;
pub use loot_sim::{sample_random_loot, LootStats};
pub use report::SimReport;
pub use runner::{hero_at_level, run_simulation, simulate_single_run, RunStats};
