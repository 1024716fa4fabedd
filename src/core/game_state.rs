//! The game state store: player, current monster and inventory.
//!
//! Every mutation goes through a method here. Each one either applies fully
//! or leaves the state as it was.

use crate::character::{Coins, Player};
use crate::core::error::GameError;
use crate::items::{EffectKind, Inventory, Item, ItemEffect};
use crate::monsters::Monster;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub current_monster: Option<Monster>,
    pub inventory: Inventory,
}

impl GameState {
    pub fn new(player_name: String) -> Self {
        Self {
            player: Player::new(player_name),
            current_monster: None,
            inventory: Inventory::new(),
        }
    }

    pub fn set_player_name(&mut self, name: String) {
        self.player.name = name;
    }

    pub fn set_current_monster(&mut self, monster: Option<Monster>) {
        self.current_monster = monster;
    }

    /// Returns true if the hero leveled up.
    pub fn gain_experience(&mut self, amount: u32) -> bool {
        self.player.gain_experience(amount)
    }

    pub fn gain_coins(&mut self, gold: u32, silver: u32, copper: u32) {
        self.player.coins.add(gold, silver, copper);
    }

    pub fn gain_coin_reward(&mut self, coins: &Coins) {
        self.gain_coins(coins.gold, coins.silver, coins.copper);
    }

    /// Spends `amount` copper. False (and no change) when the purse is short.
    pub fn spend_coins(&mut self, amount: u32) -> bool {
        self.player.coins.spend(amount)
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.player.take_damage(amount);
    }

    pub fn add_to_inventory(&mut self, item: Item) {
        self.inventory.add(item);
    }

    pub fn add_all_to_inventory(&mut self, items: impl IntoIterator<Item = Item>) {
        for item in items {
            self.inventory.add(item);
        }
    }

    pub fn remove_from_inventory(&mut self, item_id: &str) -> Option<Item> {
        self.inventory.remove(item_id)
    }

    /// Consumes one unit of an item and applies its effect to the hero.
    pub fn use_item(&mut self, item_id: &str) -> Result<Item, GameError> {
        let item = self
            .inventory
            .take_one(item_id)
            .ok_or_else(|| GameError::ItemNotFound {
                id: item_id.to_string(),
            })?;
        self.apply_effect(&item.effect);
        Ok(item)
    }

    fn apply_effect(&mut self, effect: &ItemEffect) {
        let player = &mut self.player;
        match effect.kind {
            EffectKind::Heal => player.heal(effect.power),
            EffectKind::Strength => player.strength = player.strength.saturating_add(effect.power),
            EffectKind::Defense => player.defense = player.defense.saturating_add(effect.power),
            EffectKind::Damage => player.damage = player.damage.saturating_add(effect.power),
            // Raw XP: the level check waits for the next gain_experience call
            EffectKind::Experience => {
                if let Some(value) = effect.value {
                    player.experience = player.experience.saturating_add(value);
                }
            }
            EffectKind::Teleport | EffectKind::Identify | EffectKind::Bless => {}
        }
    }

    /// Back to a fresh hero with the same name; monster and bag are cleared.
    pub fn reset_player(&mut self) {
        let name = std::mem::take(&mut self.player.name);
        *self = Self::new(name);
    }
}
