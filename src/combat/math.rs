//! Damage formulas shared by the controller and the simulator.
//!
//! These are pure functions; all rounding is floor.

use crate::character::Player;
use crate::core::config::StumblePenalty;
use crate::core::constants::*;
use std::cmp::Ordering;

/// 1.2 against a higher-level monster, 0.8 against a lower one, else 1.0.
pub fn level_gap_multiplier(player_level: u32, monster_level: u32) -> f64 {
    match monster_level.cmp(&player_level) {
        Ordering::Greater => HIGHER_MONSTER_MULTIPLIER,
        Ordering::Less => LOWER_MONSTER_MULTIPLIER,
        Ordering::Equal => 1.0,
    }
}

/// Damage the hero deals for a correct attack answer.
pub fn hero_strike_damage(player: &Player, monster_level: u32) -> u32 {
    let base = HERO_STRIKE_BASE
        + player.level * HERO_STRIKE_PER_LEVEL
        + player.strength
        + player.damage;
    (base as f64 * level_gap_multiplier(player.level, monster_level)).floor() as u32
}

/// Damage a monster deals when the hero fails to defend. Never below 1.
pub fn monster_strike_damage(monster_level: u32, defense: u32) -> u32 {
    let raw = MONSTER_STRIKE_BASE + monster_level * MONSTER_STRIKE_PER_LEVEL;
    let mitigation = (defense as f64 * DEFENSE_MITIGATION).floor() as u32;
    raw.saturating_sub(mitigation).max(MIN_MONSTER_STRIKE)
}

/// Damage the hero takes for a wrong attack answer.
pub fn stumble_damage(penalty: StumblePenalty, monster_level: u32, defense: u32) -> u32 {
    match penalty {
        StumblePenalty::MonsterStrike => monster_strike_damage(monster_level, defense),
        StumblePenalty::Flat(amount) => amount,
    }
}
