use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Potion,
    ExperiencePotion,
    Weapon,
    Armor,
    Scroll,
    Gem,
    Food,
    Material,
}

impl ItemType {
    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Potion => "Potion",
            ItemType::ExperiencePotion => "Experience Potion",
            ItemType::Weapon => "Weapon",
            ItemType::Armor => "Armor",
            ItemType::Scroll => "Scroll",
            ItemType::Gem => "Gem",
            ItemType::Food => "Food",
            ItemType::Material => "Material",
        }
    }

    /// Weapons and armor always occupy their own inventory entry.
    pub fn is_stackable(&self) -> bool {
        !matches!(self, ItemType::Weapon | ItemType::Armor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Scales gem, food and material stats.
    pub fn multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.5,
            Rarity::Rare => 2.0,
            Rarity::Epic => 3.0,
            Rarity::Legendary => 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Heal,
    Strength,
    Defense,
    Damage,
    Teleport,
    Identify,
    Bless,
    Experience,
}

impl EffectKind {
    /// Lowercase word used in generated item names ("heal potion").
    pub fn word(&self) -> &'static str {
        match self {
            EffectKind::Heal => "heal",
            EffectKind::Strength => "strength",
            EffectKind::Defense => "defense",
            EffectKind::Damage => "damage",
            EffectKind::Teleport => "teleport",
            EffectKind::Identify => "identify",
            EffectKind::Bless => "bless",
            EffectKind::Experience => "experience",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEffect {
    pub kind: EffectKind,
    pub power: u32,
    /// Explicit amount where it differs from power (experience grants)
    #[serde(default)]
    pub value: Option<u32>,
}

impl ItemEffect {
    pub fn new(kind: EffectKind, power: u32) -> Self {
        Self {
            kind,
            power,
            value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub rarity: Rarity,
    /// Price in copper
    pub value: u32,
    pub effect: ItemEffect,
    pub stackable: bool,
    /// Present only on stackable items
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Item {
    /// Stack size; non-stackable items count as one.
    pub fn count(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    /// Stackable items merge when these match.
    pub fn stacks_with(&self, other: &Item) -> bool {
        self.stackable
            && other.stackable
            && self.name == other.name
            && self.item_type == other.item_type
            && self.rarity == other.rarity
    }
}
