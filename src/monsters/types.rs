use crate::character::Coins;
use crate::items::Item;
use crate::problems::Problem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterRewards {
    pub experience: u32,
    pub coins: Coins,
    /// Always empty; kill loot is rolled separately when the monster dies.
    #[serde(default)]
    pub possible_items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub image: String,
    /// The attack problem; stays the same until the monster dies
    pub problem: Problem,
    pub rewards: MonsterRewards,
}

impl Monster {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp as f64
    }
}
