//! The merchant that appears between fights.
//!
//! Stock is fixed potions plus one sword and one armor scaled to the hero's
//! level. Prices are in copper.

use crate::core::ids::fresh_id;
use crate::items::{material_for_level, EffectKind, Item, ItemEffect, ItemType, Rarity};
use rand::Rng;
use serde::{Deserialize, Serialize};

const SHOP_WEAPON_MATERIALS: [&str; 3] = ["iron", "steel", "golden"];
const SHOP_ARMOR_MATERIALS: [&str; 3] = ["leather", "iron", "steel"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub level: u32,
    pub stock: Vec<Item>,
}

impl Shop {
    pub fn for_level(level: u32) -> Self {
        Self {
            level,
            stock: shop_stock(level),
        }
    }

    pub fn find(&self, stock_id: &str) -> Option<&Item> {
        self.stock.iter().find(|item| item.id == stock_id)
    }

    /// A copy of a stock entry with its own id, ready for the inventory.
    pub fn sell(&self, stock_id: &str, rng: &mut impl Rng) -> Option<Item> {
        let mut item = self.find(stock_id)?.clone();
        item.id = fresh_id(rng);
        Some(item)
    }
}

fn stock_item(
    id: &str,
    name: String,
    description: String,
    item_type: ItemType,
    value: u32,
    effect: ItemEffect,
) -> Item {
    let stackable = item_type.is_stackable();
    Item {
        id: id.to_string(),
        name,
        description,
        item_type,
        rarity: Rarity::Common,
        value,
        effect,
        stackable,
        quantity: stackable.then_some(1),
        image: None,
    }
}

pub fn shop_stock(level: u32) -> Vec<Item> {
    let weapon = material_for_level(&SHOP_WEAPON_MATERIALS, level);
    let weapon_power = 10 + level * 2;
    let armor = material_for_level(&SHOP_ARMOR_MATERIALS, level);
    let armor_power = 5 + level;

    vec![
        stock_item(
            "store_heal_potion",
            "Health Potion".to_string(),
            "Restores 50 HP".to_string(),
            ItemType::Potion,
            10,
            ItemEffect::new(EffectKind::Heal, 50),
        ),
        stock_item(
            "store_strength_potion",
            "Strength Potion".to_string(),
            "Increases strength by 5".to_string(),
            ItemType::Potion,
            15,
            ItemEffect::new(EffectKind::Strength, 5),
        ),
        stock_item(
            "store_defense_potion",
            "Defense Potion".to_string(),
            "Increases defense by 5".to_string(),
            ItemType::Potion,
            15,
            ItemEffect::new(EffectKind::Defense, 5),
        ),
        stock_item(
            "store_weapon",
            format!("{} sword", weapon),
            format!("A {} sword that deals {} damage", weapon, weapon_power),
            ItemType::Weapon,
            30 + level * 10,
            ItemEffect::new(EffectKind::Damage, weapon_power),
        ),
        stock_item(
            "store_armor",
            format!("{} armor", armor),
            format!("{} armor that provides {} defense", armor, armor_power),
            ItemType::Armor,
            25 + level * 8,
            ItemEffect::new(EffectKind::Defense, armor_power),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_stock_at_level_one() {
        let stock = shop_stock(1);
        assert_eq!(stock.len(), 5);
        assert_eq!(stock[0].name, "Health Potion");
        assert_eq!(stock[0].value, 10);
        assert_eq!(stock[3].name, "iron sword");
        assert_eq!(stock[3].effect.power, 12);
        assert_eq!(stock[3].value, 40);
        assert_eq!(stock[4].name, "leather armor");
        assert_eq!(stock[4].effect.power, 6);
        assert_eq!(stock[4].value, 33);
    }

    #[test]
    fn test_gear_tier_caps() {
        let stock = shop_stock(30);
        assert_eq!(stock[3].name, "golden sword");
        assert_eq!(stock[4].name, "steel armor");
    }

    #[test]
    fn test_gear_is_not_stackable() {
        let stock = shop_stock(4);
        assert!(stock[..3].iter().all(|item| item.stackable && item.quantity == Some(1)));
        assert!(stock[3..].iter().all(|item| !item.stackable && item.quantity.is_none()));
    }

    #[test]
    fn test_sell_gives_fresh_id() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shop = Shop::for_level(2);
        let bought = shop.sell("store_weapon", &mut rng).unwrap();
        assert_ne!(bought.id, "store_weapon");
        assert_eq!(bought.name, shop.stock[3].name);
        assert!(shop.sell("store_dragon", &mut rng).is_none());
    }
}
