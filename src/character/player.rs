use super::coins::Coins;
use crate::core::constants::*;
use crate::core::error::GameError;
use serde::{Deserialize, Serialize};

/// The hero. Combat modifiers are flat and additive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub current_hp: u32,
    pub max_hp: u32,
    pub strength: u32,
    pub defense: u32,
    pub damage: u32,
    pub coins: Coins,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            level: STARTING_LEVEL,
            experience: 0,
            current_hp: BASE_MAX_HP,
            max_hp: BASE_MAX_HP,
            strength: STARTING_STRENGTH,
            defense: STARTING_DEFENSE,
            damage: STARTING_DAMAGE,
            coins: Coins::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// XP needed to leave the current level.
    pub fn xp_to_next_level(&self) -> u32 {
        self.level.saturating_mul(XP_PER_LEVEL)
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.current_hp as f64 / self.max_hp as f64
    }

    /// Adds XP and applies at most one level-up, which refills HP.
    ///
    /// A grant larger than two thresholds still only levels once; the
    /// leftover stays in `experience` until the next grant.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        let total = self.experience.saturating_add(amount);
        let threshold = self.xp_to_next_level();
        if total < threshold {
            self.experience = total;
            return false;
        }

        self.level += 1;
        self.experience = total - threshold;
        self.max_hp = max_hp_for_level(self.level);
        self.current_hp = self.max_hp;
        true
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Restores HP, never past max.
    pub fn heal(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
    }
}

pub fn max_hp_for_level(level: u32) -> u32 {
    BASE_MAX_HP + level.saturating_sub(1) * MAX_HP_PER_LEVEL
}

/// Human-readable form of [`is_name_char`].
pub const NAME_CHARSET_HINT: &str = "letters, numbers, spaces, hyphens, and underscores";

pub fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == ' ' || c == '-' || c == '_'
}

/// Checks a hero name and returns it trimmed.
pub fn validate_name(name: &str) -> Result<String, GameError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(GameError::InvalidName {
            reason: "Name cannot be empty".to_string(),
        });
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(GameError::InvalidName {
            reason: format!("Name must be {} characters or less", MAX_NAME_LENGTH),
        });
    }

    if !trimmed.chars().all(is_name_char) {
        return Err(GameError::InvalidName {
            reason: format!("Name can only contain {}", NAME_CHARSET_HINT),
        });
    }

    Ok(trimmed.to_string())
}
