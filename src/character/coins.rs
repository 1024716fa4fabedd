//! Gold/silver/copper purse.
//!
//! Gains are componentwise, so a purse can hold 15 silver without it turning
//! into 1 gold 5 silver. Only spending renormalizes.

use crate::core::constants::{COPPER_PER_GOLD, COPPER_PER_SILVER};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins {
    pub gold: u32,
    pub silver: u32,
    pub copper: u32,
}

impl Coins {
    pub fn new(gold: u32, silver: u32, copper: u32) -> Self {
        Self {
            gold,
            silver,
            copper,
        }
    }

    /// Canonical split of a copper total.
    ///
    /// A total too large for canonical gold keeps gold at `u32::MAX` and
    /// leaves the excess in silver and copper, so no copper is lost.
    pub fn from_total(total: u64) -> Self {
        let gold_cap = u64::from(u32::MAX);
        let gold = (total / u64::from(COPPER_PER_GOLD)).min(gold_cap);
        let rest = total - gold * u64::from(COPPER_PER_GOLD);
        let silver = (rest / u64::from(COPPER_PER_SILVER)).min(gold_cap);
        let copper = rest - silver * u64::from(COPPER_PER_SILVER);
        Self {
            gold: gold as u32,
            silver: silver as u32,
            copper: u32::try_from(copper).unwrap_or(u32::MAX),
        }
    }

    /// Value of the purse in copper. Widened so a full purse never clamps.
    pub fn total(&self) -> u64 {
        u64::from(self.gold) * u64::from(COPPER_PER_GOLD)
            + u64::from(self.silver) * u64::from(COPPER_PER_SILVER)
            + u64::from(self.copper)
    }

    pub fn add(&mut self, gold: u32, silver: u32, copper: u32) {
        self.gold = self.gold.saturating_add(gold);
        self.silver = self.silver.saturating_add(silver);
        self.copper = self.copper.saturating_add(copper);
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.total() >= u64::from(amount)
    }

    /// Deducts `amount` copper and re-splits the rest canonically.
    /// Returns false and leaves the purse alone when it holds too little.
    pub fn spend(&mut self, amount: u32) -> bool {
        let total = self.total();
        let amount = u64::from(amount);
        if total < amount {
            return false;
        }
        *self = Self::from_total(total - amount);
        true
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g {}s {}c", self.gold, self.silver, self.copper)
    }
}
