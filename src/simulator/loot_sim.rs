//! Loot statistics for simulated runs and the random-roll table.

use crate::items::{roll_random_item, ItemType, Rarity};
use rand::Rng;
use serde::Serialize;

/// Statistics about loot drops.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LootStats {
    pub total_drops: u32,
    pub total_drop_attempts: u32,
    pub common_drops: u32,
    pub uncommon_drops: u32,
    pub rare_drops: u32,
    pub epic_drops: u32,
    pub legendary_drops: u32,
    pub potions: u32,
    pub equipment: u32,
    pub other: u32,
}

impl LootStats {
    pub fn record_drop(&mut self, rarity: Rarity, item_type: ItemType) {
        self.total_drops += 1;

        match rarity {
            Rarity::Common => self.common_drops += 1,
            Rarity::Uncommon => self.uncommon_drops += 1,
            Rarity::Rare => self.rare_drops += 1,
            Rarity::Epic => self.epic_drops += 1,
            Rarity::Legendary => self.legendary_drops += 1,
        }

        match item_type {
            ItemType::Potion => self.potions += 1,
            ItemType::Weapon | ItemType::Armor => self.equipment += 1,
            _ => self.other += 1,
        }
    }

    pub fn record_attempt(&mut self) {
        self.total_drop_attempts += 1;
    }

    pub fn drop_rate(&self) -> f64 {
        if self.total_drop_attempts == 0 {
            0.0
        } else {
            self.total_drops as f64 / self.total_drop_attempts as f64
        }
    }

    pub fn count_for(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common_drops,
            Rarity::Uncommon => self.uncommon_drops,
            Rarity::Rare => self.rare_drops,
            Rarity::Epic => self.epic_drops,
            Rarity::Legendary => self.legendary_drops,
        }
    }

    pub fn merge(&mut self, other: &LootStats) {
        self.total_drops += other.total_drops;
        self.total_drop_attempts += other.total_drop_attempts;
        self.common_drops += other.common_drops;
        self.uncommon_drops += other.uncommon_drops;
        self.rare_drops += other.rare_drops;
        self.epic_drops += other.epic_drops;
        self.legendary_drops += other.legendary_drops;
        self.potions += other.potions;
        self.equipment += other.equipment;
        self.other += other.other;
    }
}

/// Rolls the general random-item table `samples` times at one monster level.
pub fn sample_random_loot(
    monster_level: u32,
    drop_chance: f64,
    samples: u32,
    rng: &mut impl Rng,
) -> LootStats {
    let mut stats = LootStats::default();
    for _ in 0..samples {
        stats.record_attempt();
        if let Some(item) = roll_random_item(monster_level, drop_chance, rng) {
            stats.record_drop(item.rarity, item.item_type);
        }
    }
    stats
}
