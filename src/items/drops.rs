//! Loot rolls: the general random-item roll and the combat monster drop.

use super::generation::{generate_armor, generate_item, generate_potion, generate_scroll, generate_weapon};
use super::types::{Item, ItemType, Rarity};
use rand::Rng;

/// Rolls a rarity; stronger monsters shift weight away from Common.
pub fn roll_rarity(monster_level: u32, rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen::<f64>() * 100.0;

    // (legendary, epic, rare, uncommon) cumulative thresholds out of 100
    let (legendary, epic, rare, uncommon) = if monster_level >= 10 {
        (1.0, 5.0, 15.0, 40.0)
    } else if monster_level >= 5 {
        (0.5, 3.0, 10.0, 30.0)
    } else {
        (0.1, 1.0, 5.0, 20.0)
    };

    if roll < legendary {
        Rarity::Legendary
    } else if roll < epic {
        Rarity::Epic
    } else if roll < rare {
        Rarity::Rare
    } else if roll < uncommon {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// Rolls an item category. Low levels favor food and materials, high levels
/// unlock gear and experience potions.
pub fn roll_item_type(monster_level: u32, rng: &mut impl Rng) -> ItemType {
    let roll = rng.gen::<f64>() * 100.0;

    if monster_level < 3 {
        match roll {
            r if r < 40.0 => ItemType::Food,
            r if r < 70.0 => ItemType::Material,
            r if r < 85.0 => ItemType::Potion,
            _ => ItemType::Scroll,
        }
    } else if monster_level < 7 {
        match roll {
            r if r < 30.0 => ItemType::Potion,
            r if r < 50.0 => ItemType::Food,
            r if r < 70.0 => ItemType::Material,
            r if r < 85.0 => ItemType::Scroll,
            _ => ItemType::Gem,
        }
    } else {
        match roll {
            r if r < 25.0 => ItemType::Potion,
            r if r < 40.0 => ItemType::ExperiencePotion,
            r if r < 60.0 => ItemType::Weapon,
            r if r < 80.0 => ItemType::Armor,
            _ => ItemType::Gem,
        }
    }
}

/// General random item roll. `drop_chance` is the chance that anything drops.
pub fn roll_random_item(monster_level: u32, drop_chance: f64, rng: &mut impl Rng) -> Option<Item> {
    if rng.gen::<f64>() >= drop_chance {
        return None;
    }

    let rarity = roll_rarity(monster_level, rng);
    let item_type = roll_item_type(monster_level, rng);
    Some(generate_item(item_type, rarity, monster_level, rng))
}

/// Combat drop after a kill: at most one basic item, category picked uniformly.
pub fn roll_monster_drops(monster_level: u32, drop_chance: f64, rng: &mut impl Rng) -> Vec<Item> {
    let mut drops = Vec::new();

    if rng.gen::<f64>() < drop_chance {
        let item = match rng.gen_range(0..4) {
            0 => generate_potion(monster_level, rng),
            1 => generate_weapon(monster_level, rng),
            2 => generate_armor(monster_level, rng),
            3 => generate_scroll(monster_level, rng),
            _ => unreachable!(),
        };
        drops.push(item);
    }

    drops
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn rarity_counts(level: u32) -> HashMap<Rarity, u32> {
        let mut rng = create_test_rng();
        let mut counts = HashMap::new();
        for _ in 0..10_000 {
            *counts.entry(roll_rarity(level, &mut rng)).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_low_level_rarity_is_mostly_common() {
        let counts = rarity_counts(1);
        let common = counts.get(&Rarity::Common).copied().unwrap_or(0);
        assert!(common > 7500, "Common should be ~80%, got {common}");
    }

    #[test]
    fn test_high_level_rarity_shifts_up() {
        let low = rarity_counts(1);
        let high = rarity_counts(12);
        let low_common = low.get(&Rarity::Common).copied().unwrap_or(0);
        let high_common = high.get(&Rarity::Common).copied().unwrap_or(0);
        assert!(
            high_common < low_common,
            "level 12 common ({high_common}) should be below level 1 ({low_common})"
        );
        assert!(high.get(&Rarity::Epic).copied().unwrap_or(0) > 0);
    }

    #[test]
    fn test_item_type_buckets_by_level() {
        let mut rng = create_test_rng();
        for _ in 0..500 {
            let low = roll_item_type(1, &mut rng);
            assert!(matches!(
                low,
                ItemType::Food | ItemType::Material | ItemType::Potion | ItemType::Scroll
            ));
            let high = roll_item_type(9, &mut rng);
            assert!(!matches!(
                high,
                ItemType::Food | ItemType::Material | ItemType::Scroll
            ));
        }
    }

    #[test]
    fn test_random_item_drop_rate() {
        let mut rng = create_test_rng();
        let trials = 5000;
        let drops = (0..trials)
            .filter(|_| roll_random_item(4, 0.3, &mut rng).is_some())
            .count();
        assert!(
            drops > 1300 && drops < 1700,
            "Expected ~30% drops, got {drops}/{trials}"
        );
    }

    #[test]
    fn test_random_item_never_drops_at_zero_chance() {
        let mut rng = create_test_rng();
        assert!((0..200).all(|_| roll_random_item(10, 0.0, &mut rng).is_none()));
    }

    #[test]
    fn test_monster_drops_are_basic_items() {
        let mut rng = create_test_rng();
        for _ in 0..200 {
            let drops = roll_monster_drops(3, 1.0, &mut rng);
            assert_eq!(drops.len(), 1);
            assert!(matches!(
                drops[0].item_type,
                ItemType::Potion | ItemType::Weapon | ItemType::Armor | ItemType::Scroll
            ));
        }
    }

    #[test]
    fn test_monster_drop_rate() {
        let mut rng = create_test_rng();
        let trials = 5000;
        let drops: usize = (0..trials)
            .map(|_| roll_monster_drops(2, 0.3, &mut rng).len())
            .sum();
        assert!(
            drops > 1300 && drops < 1700,
            "Expected ~30% drops, got {drops}/{trials}"
        );
    }
}
