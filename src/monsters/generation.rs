//! Monster spawning.
//!
//! The catalog unlocks one more monster every 3 spawn levels. The spawned
//! monster's own level wobbles by one around the spawn level.

use super::types::{Monster, MonsterRewards};
use crate::character::Coins;
use crate::core::constants::*;
use crate::core::ids::fresh_id;
use crate::problems::generate_problem;
use rand::Rng;

/// (name, image), in unlock order.
pub const MONSTER_CATALOG: [(&str, &str); 5] = [
    ("Mathling", "/images/monsters/mathling.png"),
    ("Number Goblin", "/images/monsters/goblin.png"),
    ("Equation Elemental", "/images/monsters/elemental.png"),
    ("Division Dragon", "/images/monsters/dragon.png"),
    ("Algebra Apparition", "/images/monsters/apparition.png"),
];

/// How many catalog entries can spawn at a level: 2 at 1-3, 3 at 4-6,
/// 4 at 7-9, all 5 from 10.
pub fn eligible_monster_count(spawn_level: u32) -> usize {
    let unlocked = STARTING_CATALOG_SIZE + (spawn_level.saturating_sub(1) / CATALOG_GROWTH_LEVELS) as usize;
    unlocked.min(MONSTER_CATALOG.len())
}

pub fn monster_hp(level: u32, hp_per_level: u32) -> u32 {
    MONSTER_BASE_HP.saturating_add(level.saturating_mul(hp_per_level))
}

pub fn monster_rewards(level: u32) -> MonsterRewards {
    MonsterRewards {
        experience: MONSTER_XP_PER_LEVEL * level,
        coins: Coins::new(
            level / 2,
            level * MONSTER_SILVER_PER_LEVEL,
            level * MONSTER_COPPER_PER_LEVEL,
        ),
        possible_items: Vec::new(),
    }
}

/// Rolls `max(1, spawn_level + {-1, 0, 1})`.
pub fn roll_monster_level(spawn_level: u32, rng: &mut impl Rng) -> u32 {
    let offset = rng.gen_range(-MONSTER_LEVEL_VARIANCE..=MONSTER_LEVEL_VARIANCE);
    (spawn_level as i64 + offset).max(1) as u32
}

pub fn generate_monster(spawn_level: u32, hp_per_level: u32, rng: &mut impl Rng) -> Monster {
    let (name, image) = MONSTER_CATALOG[rng.gen_range(0..eligible_monster_count(spawn_level))];
    let level = roll_monster_level(spawn_level, rng);
    let hp = monster_hp(level, hp_per_level);
    let problem = generate_problem(level, rng);

    Monster {
        id: fresh_id(rng),
        name: name.to_string(),
        level,
        hp,
        max_hp: hp,
        image: image.to_string(),
        problem,
        rewards: monster_rewards(level),
    }
}
