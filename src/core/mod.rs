//! Core game state, rules and shared plumbing.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod ids;

pub use config::{GameConfig, StumblePenalty};
pub use constants::*;
pub use error::{ConfigError, GameError};
pub use game_state::GameState;
