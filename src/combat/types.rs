use crate::character::Coins;
use crate::core::constants::COMBAT_LOG_CAPACITY;
use crate::items::{ItemType, Rarity};
use crate::problems::Problem;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Where the fight currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatPhase {
    /// No monster in the arena
    Idle,
    /// The hero answers the monster's attack problem
    PlayerTurn,
    /// The hero answers a fresh problem to block the incoming hit
    MonsterTurn { defense_problem: Problem },
    /// Merchant interstitial; no monster, purchases allowed
    Shop,
    /// The hero has fallen; only a restart continues
    GameOver,
}

impl CombatPhase {
    pub fn is_combat(&self) -> bool {
        matches!(self, CombatPhase::PlayerTurn | CombatPhase::MonsterTurn { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    Attack,
    Defense,
}

/// The judgement on a submitted answer, returned before its effect lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub stance: Stance,
    pub correct: bool,
    pub expected: i64,
}

/// An effect that has been decided but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingEffect {
    HeroStrike { damage: u32 },
    Stumble { damage: u32, expected: i64 },
    Block,
    MonsterStrike { damage: u32, expected: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    HeroStrike { damage: u32, monster_hp: u32 },
    Stumble { damage: u32, player_hp: u32 },
    Blocked,
    MonsterStrike { damage: u32, player_hp: u32 },
    MonsterTurnBegins { incoming_damage: u32 },
    MonsterDefeated {
        name: String,
        experience: u32,
        coins: Coins,
    },
    LevelUp { new_level: u32 },
    LootDropped {
        item_name: String,
        item_type: ItemType,
        rarity: Rarity,
    },
    MonsterAppeared {
        name: String,
        level: u32,
        stronger: bool,
    },
    ShopOpened,
    PlayerDefeated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub message: String,
    pub is_player_action: bool,
}

/// The last few combat lines, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLog {
    entries: VecDeque<CombatLogEntry>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(COMBAT_LOG_CAPACITY),
        }
    }

    pub fn push(&mut self, message: String, is_player_action: bool) {
        // Keep only the last 10 entries
        if self.entries.len() >= COMBAT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(CombatLogEntry {
            message,
            is_player_action,
        });
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &CombatLogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&CombatLogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combat_log_drops_oldest_past_capacity() {
        let mut log = CombatLog::new();
        for i in 0..COMBAT_LOG_CAPACITY + 3 {
            log.push(format!("line {i}"), i % 2 == 0);
        }
        assert_eq!(log.len(), COMBAT_LOG_CAPACITY);
        assert_eq!(log.entries().next().map(|e| e.message.as_str()), Some("line 3"));
        assert_eq!(
            log.latest().map(|e| e.message.clone()),
            Some(format!("line {}", COMBAT_LOG_CAPACITY + 2))
        );
    }

    #[test]
    fn test_phase_is_combat() {
        assert!(CombatPhase::PlayerTurn.is_combat());
        assert!(!CombatPhase::Shop.is_combat());
        assert!(!CombatPhase::GameOver.is_combat());
        assert!(!CombatPhase::Idle.is_combat());
    }
}
