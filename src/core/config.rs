//! Tunable game rules.
//!
//! Defaults reproduce the canonical rules; presets and JSON overrides exist for
//! balance experiments and the alternative rule variants.

use super::constants::*;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What happens to the hero after a wrong attack answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StumblePenalty {
    /// The hero takes the same hit a monster strike would deal.
    MonsterStrike,
    /// The hero takes a fixed amount.
    Flat(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// HP each monster level adds on top of the base 50
    pub monster_hp_per_level: u32,

    /// Chance that the next monster spawns one level above the defeated one
    pub stronger_spawn_chance: f64,

    /// Every Nth defeat opens the shop instead of spawning
    pub shop_interval: u32,

    /// Chance of a combat drop when a monster dies
    pub monster_drop_chance: f64,

    /// Chance that the general random roll produces an item at all
    pub random_item_drop_chance: f64,

    pub stumble_penalty: StumblePenalty,

    /// After a wrong attack: true hands the turn to the monster, false lets the
    /// hero try the same problem again.
    pub stumble_passes_turn: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            monster_hp_per_level: MONSTER_HP_PER_LEVEL,
            stronger_spawn_chance: STRONGER_SPAWN_CHANCE,
            shop_interval: SHOP_INTERVAL,
            monster_drop_chance: MONSTER_DROP_CHANCE,
            random_item_drop_chance: RANDOM_ITEM_DROP_CHANCE,
            stumble_penalty: StumblePenalty::MonsterStrike,
            stumble_passes_turn: true,
        }
    }
}

impl GameConfig {
    /// The lighter rule set: monsters scale by 10 HP per level and a wrong
    /// attack costs a flat 10 HP without giving up the turn.
    pub fn gentle() -> Self {
        Self {
            monster_hp_per_level: 10,
            stumble_penalty: StumblePenalty::Flat(FLAT_STUMBLE_DAMAGE),
            stumble_passes_turn: false,
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monster_hp_per_level > MAX_MONSTER_HP_PER_LEVEL {
            return Err(ConfigError::Invalid(format!(
                "monster_hp_per_level must be at most {MAX_MONSTER_HP_PER_LEVEL}, got {}",
                self.monster_hp_per_level
            )));
        }
        if self.shop_interval == 0 {
            return Err(ConfigError::Invalid(
                "shop_interval must be at least 1".to_string(),
            ));
        }
        for (name, chance) in [
            ("stronger_spawn_chance", self.stronger_spawn_chance),
            ("monster_drop_chance", self.monster_drop_chance),
            ("random_item_drop_chance", self.random_item_drop_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 0 and 1, got {chance}"
                )));
            }
        }
        Ok(())
    }
}
