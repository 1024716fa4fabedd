// Player defaults
pub const STARTING_LEVEL: u32 = 1;
pub const BASE_MAX_HP: u32 = 100;
pub const MAX_HP_PER_LEVEL: u32 = 20;
pub const STARTING_STRENGTH: u32 = 10;
pub const STARTING_DEFENSE: u32 = 5;
pub const STARTING_DAMAGE: u32 = 8;
pub const MAX_NAME_LENGTH: usize = 16;

// XP needed to leave a level is level * XP_PER_LEVEL
pub const XP_PER_LEVEL: u32 = 100;

// Coin denominations in copper
pub const COPPER_PER_SILVER: u32 = 10;
pub const COPPER_PER_GOLD: u32 = 100;

// Hero strike: (base + level * per_level + strength + damage) * level-gap multiplier
pub const HERO_STRIKE_BASE: u32 = 10;
pub const HERO_STRIKE_PER_LEVEL: u32 = 2;
pub const HIGHER_MONSTER_MULTIPLIER: f64 = 1.2;
pub const LOWER_MONSTER_MULTIPLIER: f64 = 0.8;

// Monster strike: max(1, base + level * per_level - defense * mitigation)
pub const MONSTER_STRIKE_BASE: u32 = 15;
pub const MONSTER_STRIKE_PER_LEVEL: u32 = 2;
pub const DEFENSE_MITIGATION: f64 = 0.5;
pub const MIN_MONSTER_STRIKE: u32 = 1;
pub const FLAT_STUMBLE_DAMAGE: u32 = 10;

// Monster generation
pub const MONSTER_BASE_HP: u32 = 50;
pub const MONSTER_HP_PER_LEVEL: u32 = 15;
pub const MAX_MONSTER_HP_PER_LEVEL: u32 = 10_000;
pub const MONSTER_LEVEL_VARIANCE: i64 = 1;
pub const MONSTER_XP_PER_LEVEL: u32 = 25;
pub const MONSTER_SILVER_PER_LEVEL: u32 = 2;
pub const MONSTER_COPPER_PER_LEVEL: u32 = 8;
pub const STARTING_CATALOG_SIZE: usize = 2;
pub const CATALOG_GROWTH_LEVELS: u32 = 3;

// Problem operands
pub const ADDITION_RANGE_PER_LEVEL: i64 = 10;
pub const SUBTRACTION_RANGE_PER_LEVEL: i64 = 10;
pub const MULTIPLICAND_RANGE_PER_LEVEL: i64 = 5;
pub const MULTIPLIER_MAX: i64 = 10;
pub const DIVISOR_MAX: i64 = 10;
pub const QUOTIENT_MAX: i64 = 10;
pub const LEVELS_PER_OPERATION: u32 = 3;

// Progression
pub const STRONGER_SPAWN_CHANCE: f64 = 0.3;
pub const SHOP_INTERVAL: u32 = 5;

// Loot
pub const MONSTER_DROP_CHANCE: f64 = 0.3;
pub const RANDOM_ITEM_DROP_CHANCE: f64 = 0.3;

// UI / log
pub const COMBAT_LOG_CAPACITY: usize = 10;
pub const INVALID_ANSWER_MESSAGE: &str = "Please enter a valid number!";
