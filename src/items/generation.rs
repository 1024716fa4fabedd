//! Per-category item constructors.
//!
//! `level` is the level of the monster (or shop) the item comes from. Every
//! constructor assigns a fresh id.

use super::types::{EffectKind, Item, ItemEffect, ItemType, Rarity};
use crate::core::ids::fresh_id;
use rand::Rng;

const POTION_EFFECTS: [EffectKind; 3] = [EffectKind::Heal, EffectKind::Strength, EffectKind::Defense];
const SCROLL_EFFECTS: [EffectKind; 3] = [EffectKind::Teleport, EffectKind::Identify, EffectKind::Bless];

const WEAPON_MATERIALS: [&str; 4] = ["rusty", "iron", "steel", "golden"];
const ARMOR_MATERIALS: [&str; 4] = ["leather", "iron", "steel", "golden"];

/// (name, image)
const GEM_KINDS: [(&str, &str); 3] = [
    ("Ruby", "/images/items/gems/ruby.png"),
    ("Sapphire", "/images/items/gems/sapphire.png"),
    ("Emerald", "/images/items/gems/emerald.png"),
];

/// (name, image, base heal)
const FOOD_KINDS: [(&str, &str, u32); 3] = [
    ("Apple", "/images/items/food/apple.png", 10),
    ("Bread", "/images/items/food/bread.png", 15),
    ("Meat", "/images/items/food/meat.png", 20),
];

const MATERIAL_KINDS: [(&str, &str); 3] = [
    ("Wood", "/images/items/materials/wood.png"),
    ("Iron Ore", "/images/items/materials/iron_ore.png"),
    ("Gold Ore", "/images/items/materials/gold_ore.png"),
];

/// Experience granted by an experience potion before level scaling.
pub fn base_potion_experience(rarity: Rarity) -> u32 {
    match rarity {
        Rarity::Common => 50,
        Rarity::Uncommon => 100,
        Rarity::Rare => 250,
        Rarity::Epic => 500,
        Rarity::Legendary => 1000,
    }
}

/// Material tier for gear: advances every 3 levels, capped at the last entry.
pub fn material_for_level<'a>(materials: &[&'a str], level: u32) -> &'a str {
    let index = ((level / 3) as usize).min(materials.len() - 1);
    materials[index]
}

fn scaled(base: f64, rarity: Rarity) -> u32 {
    (base * rarity.multiplier()).floor() as u32
}

#[allow(clippy::too_many_arguments)]
fn build(
    rng: &mut impl Rng,
    name: String,
    description: String,
    item_type: ItemType,
    rarity: Rarity,
    value: u32,
    effect: ItemEffect,
    quantity: u32,
    image: Option<&str>,
) -> Item {
    let stackable = item_type.is_stackable();
    Item {
        id: fresh_id(rng),
        name,
        description,
        item_type,
        rarity,
        value,
        effect,
        stackable,
        quantity: stackable.then_some(quantity),
        image: image.map(str::to_string),
    }
}

pub fn generate_potion(level: u32, rng: &mut impl Rng) -> Item {
    let kind = POTION_EFFECTS[rng.gen_range(0..POTION_EFFECTS.len())];
    let power = 10 + level * 5;
    build(
        rng,
        format!("{} potion", kind.word()),
        format!("Restores {} {}", power, kind.word()),
        ItemType::Potion,
        Rarity::Common,
        10 + level * 5,
        ItemEffect::new(kind, power),
        1,
        None,
    )
}

pub fn generate_experience_potion(rarity: Rarity, level: u32, rng: &mut impl Rng) -> Item {
    let experience =
        (base_potion_experience(rarity) as f64 * (1.0 + level as f64 * 0.2)).floor() as u32;
    let size = match rarity {
        Rarity::Legendary => "Large",
        Rarity::Epic | Rarity::Rare => "Medium",
        Rarity::Common | Rarity::Uncommon => "Small",
    };
    let image = format!(
        "/images/items/experience/{}_exp_potion.png",
        size.to_lowercase()
    );
    build(
        rng,
        format!("{} {} Experience Potion", rarity.name(), size),
        format!("Grants {} experience points when consumed.", experience),
        ItemType::ExperiencePotion,
        rarity,
        experience / 10,
        ItemEffect {
            kind: EffectKind::Experience,
            power: experience,
            value: Some(experience),
        },
        1,
        Some(image.as_str()),
    )
}

pub fn generate_weapon(level: u32, rng: &mut impl Rng) -> Item {
    let material = material_for_level(&WEAPON_MATERIALS, level);
    let power = 10 + level * 2;
    build(
        rng,
        format!("{} sword", material),
        format!("A {} sword that deals {} damage", material, power),
        ItemType::Weapon,
        Rarity::Common,
        30 + level * 15,
        ItemEffect::new(EffectKind::Damage, power),
        1,
        None,
    )
}

pub fn generate_armor(level: u32, rng: &mut impl Rng) -> Item {
    let material = material_for_level(&ARMOR_MATERIALS, level);
    let power = 5 + level;
    build(
        rng,
        format!("{} armor", material),
        format!("{} armor that provides {} defense", material, power),
        ItemType::Armor,
        Rarity::Common,
        25 + level * 12,
        ItemEffect::new(EffectKind::Defense, power),
        1,
        None,
    )
}

pub fn generate_scroll(level: u32, rng: &mut impl Rng) -> Item {
    let kind = SCROLL_EFFECTS[rng.gen_range(0..SCROLL_EFFECTS.len())];
    build(
        rng,
        format!("{} scroll", kind.word()),
        format!("A scroll with {} magic", kind.word()),
        ItemType::Scroll,
        Rarity::Uncommon,
        20 + level * 10,
        ItemEffect::new(kind, 5 + level * 2),
        1,
        None,
    )
}

pub fn generate_gem(rarity: Rarity, level: u32, rng: &mut impl Rng) -> Item {
    let (name, image) = GEM_KINDS[rng.gen_range(0..GEM_KINDS.len())];
    let value = scaled(level as f64 * 10.0, rarity);
    build(
        rng,
        format!("{} {}", rarity.name(), name),
        "A precious gem that can be sold for a high price.".to_string(),
        ItemType::Gem,
        rarity,
        value,
        ItemEffect::new(EffectKind::Bless, value / 10),
        1,
        Some(image),
    )
}

pub fn generate_food(rarity: Rarity, rng: &mut impl Rng) -> Item {
    let (name, image, base_heal) = FOOD_KINDS[rng.gen_range(0..FOOD_KINDS.len())];
    let heal = scaled(base_heal as f64, rarity);
    build(
        rng,
        format!("{} {}", rarity.name(), name),
        format!("Restores {} health when consumed.", heal),
        ItemType::Food,
        rarity,
        heal * 2,
        ItemEffect::new(EffectKind::Heal, heal),
        1,
        Some(image),
    )
}

pub fn generate_material(rarity: Rarity, level: u32, rng: &mut impl Rng) -> Item {
    let (name, image) = MATERIAL_KINDS[rng.gen_range(0..MATERIAL_KINDS.len())];
    let value = scaled(level as f64 * 5.0, rarity);
    let quantity = rng.gen_range(1..=3);
    build(
        rng,
        format!("{} {}", rarity.name(), name),
        "A crafting material used to create items.".to_string(),
        ItemType::Material,
        rarity,
        value,
        ItemEffect::new(EffectKind::Bless, value / 20),
        quantity,
        Some(image),
    )
}

/// Builds an item of the given category. Categories with a fixed rarity
/// (potion, weapon, armor, scroll) ignore `rarity`.
pub fn generate_item(item_type: ItemType, rarity: Rarity, level: u32, rng: &mut impl Rng) -> Item {
    match item_type {
        ItemType::Potion => generate_potion(level, rng),
        ItemType::ExperiencePotion => generate_experience_potion(rarity, level, rng),
        ItemType::Weapon => generate_weapon(level, rng),
        ItemType::Armor => generate_armor(level, rng),
        ItemType::Scroll => generate_scroll(level, rng),
        ItemType::Gem => generate_gem(rarity, level, rng),
        ItemType::Food => generate_food(rarity, rng),
        ItemType::Material => generate_material(rarity, level, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_potion_scales_with_level() {
        let mut rng = create_test_rng();
        let potion = generate_potion(4, &mut rng);
        assert_eq!(potion.item_type, ItemType::Potion);
        assert_eq!(potion.effect.power, 30);
        assert_eq!(potion.value, 30);
        assert!(POTION_EFFECTS.contains(&potion.effect.kind));
        assert!(potion.name.ends_with(" potion"));
        assert_eq!(potion.quantity, Some(1));
    }

    #[test]
    fn test_experience_potion_values() {
        let mut rng = create_test_rng();
        let potion = generate_experience_potion(Rarity::Rare, 5, &mut rng);
        // 250 * (1 + 5 * 0.2) = 500
        assert_eq!(potion.effect.power, 500);
        assert_eq!(potion.effect.value, Some(500));
        assert_eq!(potion.value, 50);
        assert_eq!(potion.name, "Rare Medium Experience Potion");
        assert_eq!(
            potion.image.as_deref(),
            Some("/images/items/experience/medium_exp_potion.png")
        );
    }

    #[test]
    fn test_experience_potion_sizes() {
        let mut rng = create_test_rng();
        assert!(generate_experience_potion(Rarity::Uncommon, 1, &mut rng)
            .name
            .contains("Small"));
        assert!(generate_experience_potion(Rarity::Legendary, 1, &mut rng)
            .name
            .contains("Large"));
    }

    #[test]
    fn test_weapon_material_and_stats() {
        let mut rng = create_test_rng();
        let sword = generate_weapon(1, &mut rng);
        assert_eq!(sword.name, "rusty sword");
        assert_eq!(sword.effect, ItemEffect::new(EffectKind::Damage, 12));
        assert_eq!(sword.value, 45);
        assert!(!sword.stackable);
        assert_eq!(sword.quantity, None);

        assert_eq!(generate_weapon(7, &mut rng).name, "steel sword");
        assert_eq!(generate_weapon(40, &mut rng).name, "golden sword");
    }

    #[test]
    fn test_armor_material_and_stats() {
        let mut rng = create_test_rng();
        let armor = generate_armor(3, &mut rng);
        assert_eq!(armor.name, "iron armor");
        assert_eq!(armor.effect, ItemEffect::new(EffectKind::Defense, 8));
        assert_eq!(armor.value, 61);
        assert!(!armor.stackable);
    }

    #[test]
    fn test_scroll_is_uncommon() {
        let mut rng = create_test_rng();
        let scroll = generate_scroll(2, &mut rng);
        assert_eq!(scroll.rarity, Rarity::Uncommon);
        assert_eq!(scroll.effect.power, 9);
        assert_eq!(scroll.value, 40);
        assert!(SCROLL_EFFECTS.contains(&scroll.effect.kind));
    }

    #[test]
    fn test_gem_rarity_scaling() {
        let mut rng = create_test_rng();
        let gem = generate_gem(Rarity::Epic, 4, &mut rng);
        assert_eq!(gem.value, 120);
        assert_eq!(gem.effect, ItemEffect::new(EffectKind::Bless, 12));
        assert!(gem.name.starts_with("Epic "));
    }

    #[test]
    fn test_food_heal_scaling() {
        let mut rng = create_test_rng();
        for _ in 0..20 {
            let food = generate_food(Rarity::Uncommon, &mut rng);
            let expected = match food.name.as_str() {
                "Uncommon Apple" => 15,
                "Uncommon Bread" => 22,
                "Uncommon Meat" => 30,
                other => panic!("unexpected food {other}"),
            };
            assert_eq!(food.effect.power, expected);
            assert_eq!(food.value, expected * 2);
        }
    }

    #[test]
    fn test_material_quantity_range() {
        let mut rng = create_test_rng();
        for _ in 0..50 {
            let material = generate_material(Rarity::Common, 2, &mut rng);
            let quantity = material.quantity.unwrap();
            assert!((1..=3).contains(&quantity));
            assert_eq!(material.value, 10);
        }
    }

    #[test]
    fn test_generate_item_fresh_ids() {
        let mut rng = create_test_rng();
        let a = generate_item(ItemType::Weapon, Rarity::Common, 1, &mut rng);
        let b = generate_item(ItemType::Weapon, Rarity::Common, 1, &mut rng);
        assert_ne!(a.id, b.id);
    }
}
