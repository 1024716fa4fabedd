//! The combat controller: the single writer of the game state.
//!
//! Every answer goes through two steps. `submit_answer` judges it and parks
//! the consequence as a [`PendingEffect`]; `advance` applies that effect and
//! moves the phase. Frontends pause between the two for feedback, headless
//! callers use `play_answer`.

use super::math::{hero_strike_damage, monster_strike_damage, stumble_damage};
use super::types::*;
use crate::character::validate_name;
use crate::core::config::GameConfig;
use crate::core::constants::INVALID_ANSWER_MESSAGE;
use crate::core::error::GameError;
use crate::core::game_state::GameState;
use crate::items::{roll_monster_drops, Item};
use crate::monsters::{generate_monster, Monster};
use crate::problems::{generate_problem, Problem};
use crate::shop::Shop;
use rand::Rng;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct CombatController {
    state: GameState,
    phase: CombatPhase,
    pending: Option<PendingEffect>,
    shop: Option<Shop>,
    monsters_defeated: u32,
    message: String,
    combat_log: CombatLog,
    config: GameConfig,
}

impl Default for CombatController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl CombatController {
    pub fn new(config: GameConfig) -> Self {
        Self::from_state(GameState::default(), config)
    }

    /// Resume from an existing state. A live monster means the hero is mid-fight.
    pub fn from_state(state: GameState, config: GameConfig) -> Self {
        let phase = if !state.player.is_alive() {
            CombatPhase::GameOver
        } else if state.current_monster.is_some() {
            CombatPhase::PlayerTurn
        } else {
            CombatPhase::Idle
        };
        Self {
            state,
            phase,
            pending: None,
            shop: None,
            monsters_defeated: 0,
            message: String::new(),
            combat_log: CombatLog::new(),
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &crate::character::Player {
        &self.state.player
    }

    pub fn current_monster(&self) -> Option<&Monster> {
        self.state.current_monster.as_ref()
    }

    pub fn inventory(&self) -> &[Item] {
        self.state.inventory.items()
    }

    pub fn phase(&self) -> &CombatPhase {
        &self.phase
    }

    pub fn pending(&self) -> Option<PendingEffect> {
        self.pending
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn combat_log(&self) -> &CombatLog {
        &self.combat_log
    }

    pub fn monsters_defeated(&self) -> u32 {
        self.monsters_defeated
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_shop_open(&self) -> bool {
        self.phase == CombatPhase::Shop
    }

    pub fn shop_stock(&self) -> &[Item] {
        self.shop.as_ref().map(|shop| shop.stock.as_slice()).unwrap_or(&[])
    }

    /// The problem the hero is expected to answer right now, if any.
    pub fn active_problem(&self) -> Option<&Problem> {
        match &self.phase {
            CombatPhase::PlayerTurn => self.state.current_monster.as_ref().map(|m| &m.problem),
            CombatPhase::MonsterTurn { defense_problem } => Some(defense_problem),
            _ => None,
        }
    }

    pub fn submit_name(&mut self, name: &str) -> Result<(), GameError> {
        let name = match validate_name(name) {
            Ok(name) => name,
            Err(err) => {
                self.message = err.to_string();
                return Err(err);
            }
        };
        info!(name = %name, "hero named");
        self.announce(format!("Welcome, {name}!"), true);
        self.state.set_player_name(name);
        Ok(())
    }

    /// Brings a monster at the hero's level into the arena.
    ///
    /// From `GameOver` this is a restart; from `Shop` it closes the shop.
    pub fn spawn_monster(&mut self, rng: &mut impl Rng) -> Result<Vec<CombatEvent>, GameError> {
        match self.phase {
            CombatPhase::GameOver => Ok(self.restart(rng)),
            CombatPhase::Shop => self.close_shop(rng),
            CombatPhase::PlayerTurn | CombatPhase::MonsterTurn { .. } => {
                Err(GameError::MonsterPresent)
            }
            CombatPhase::Idle => {
                let mut events = Vec::new();
                let level = self.state.player.level;
                self.spawn_at(level, false, rng, &mut events);
                Ok(events)
            }
        }
    }

    /// Fresh hero (same name), counter zeroed, first monster spawned.
    pub fn restart(&mut self, rng: &mut impl Rng) -> Vec<CombatEvent> {
        info!(defeated = self.monsters_defeated, "restarting");
        self.state.reset_player();
        self.pending = None;
        self.shop = None;
        self.monsters_defeated = 0;
        self.combat_log.clear();

        let mut events = Vec::new();
        let level = self.state.player.level;
        self.spawn_at(level, false, rng, &mut events);
        events
    }

    /// Sends the current monster away without rewards.
    pub fn despawn(&mut self) -> Result<(), GameError> {
        if self.phase == CombatPhase::GameOver {
            return Err(GameError::GameOver);
        }
        self.state.set_current_monster(None);
        self.pending = None;
        self.shop = None;
        self.phase = CombatPhase::Idle;
        self.announce("The arena falls quiet.".to_string(), false);
        Ok(())
    }

    /// Judges an answer and parks its effect until [`advance`](Self::advance).
    pub fn submit_answer(&mut self, input: &str) -> Result<Verdict, GameError> {
        if self.pending.is_some() {
            return Err(GameError::EffectPending);
        }
        if self.phase == CombatPhase::GameOver {
            return Err(GameError::GameOver);
        }
        let (stance, expected) = match (&self.phase, self.state.current_monster.as_ref()) {
            (CombatPhase::PlayerTurn, Some(monster)) => (Stance::Attack, monster.problem.answer),
            (CombatPhase::MonsterTurn { defense_problem }, Some(_)) => {
                (Stance::Defense, defense_problem.answer)
            }
            _ => return Err(GameError::NoActiveProblem),
        };

        let answer = match input.trim().parse::<i64>() {
            Ok(answer) => answer,
            Err(_) => {
                self.message = INVALID_ANSWER_MESSAGE.to_string();
                return Err(GameError::InvalidAnswer {
                    input: input.to_string(),
                });
            }
        };
        let correct = answer == expected;

        let Some(monster) = self.state.current_monster.as_ref() else {
            return Err(GameError::NoActiveProblem);
        };
        let player = &self.state.player;
        let effect = match (stance, correct) {
            (Stance::Attack, true) => PendingEffect::HeroStrike {
                damage: hero_strike_damage(player, monster.level),
            },
            (Stance::Attack, false) => PendingEffect::Stumble {
                damage: stumble_damage(self.config.stumble_penalty, monster.level, player.defense),
                expected,
            },
            (Stance::Defense, true) => PendingEffect::Block,
            (Stance::Defense, false) => PendingEffect::MonsterStrike {
                damage: monster_strike_damage(monster.level, player.defense),
                expected,
            },
        };
        debug!(?stance, correct, answer, expected, "answer judged");

        self.message = if correct {
            "Correct!".to_string()
        } else {
            format!("Wrong! The answer was {expected}.")
        };
        self.pending = Some(effect);
        Ok(Verdict {
            stance,
            correct,
            expected,
        })
    }

    /// Applies the parked effect and moves the fight along.
    pub fn advance(&mut self, rng: &mut impl Rng) -> Result<Vec<CombatEvent>, GameError> {
        let effect = self.pending.take().ok_or(GameError::NothingPending)?;
        let mut events = Vec::new();

        match effect {
            PendingEffect::HeroStrike { damage } => {
                let Some(monster) = self.state.current_monster.as_mut() else {
                    return Err(GameError::NoActiveProblem);
                };
                monster.take_damage(damage);
                let (name, monster_hp) = (monster.name.clone(), monster.hp);
                events.push(CombatEvent::HeroStrike { damage, monster_hp });
                self.announce(format!("Correct! You dealt {damage} damage to the {name}!"), true);

                if monster_hp == 0 {
                    self.resolve_victory(rng, &mut events);
                } else {
                    self.begin_monster_turn(rng, &mut events);
                }
            }
            PendingEffect::Stumble { damage, expected } => {
                self.state.take_damage(damage);
                let player_hp = self.state.player.current_hp;
                events.push(CombatEvent::Stumble { damage, player_hp });
                self.announce(
                    format!("Wrong answer! You stumble and take {damage} damage! ({expected} was correct)"),
                    false,
                );

                if player_hp == 0 {
                    self.game_over(&mut events);
                } else if self.config.stumble_passes_turn {
                    self.begin_monster_turn(rng, &mut events);
                }
            }
            PendingEffect::Block => {
                events.push(CombatEvent::Blocked);
                self.phase = CombatPhase::PlayerTurn;
                self.announce(
                    "You successfully defended against the monster's attack!".to_string(),
                    true,
                );
            }
            PendingEffect::MonsterStrike { damage, expected } => {
                self.state.take_damage(damage);
                let player_hp = self.state.player.current_hp;
                events.push(CombatEvent::MonsterStrike { damage, player_hp });
                self.announce(
                    format!("Wrong answer! The monster hits you for {damage} damage! ({expected} was correct)"),
                    false,
                );

                if player_hp == 0 {
                    self.game_over(&mut events);
                } else {
                    self.phase = CombatPhase::PlayerTurn;
                }
            }
        }

        Ok(events)
    }

    /// `submit_answer` and `advance` back to back. A rejected answer leaves
    /// nothing pending.
    pub fn play_answer(
        &mut self,
        input: &str,
        rng: &mut impl Rng,
    ) -> Result<(Verdict, Vec<CombatEvent>), GameError> {
        let verdict = self.submit_answer(input)?;
        let events = self.advance(rng)?;
        Ok((verdict, events))
    }

    pub fn use_item(&mut self, item_id: &str) -> Result<Item, GameError> {
        if self.phase == CombatPhase::GameOver {
            return Err(GameError::GameOver);
        }
        match self.state.use_item(item_id) {
            Ok(item) => {
                info!(item = %item.name, "item used");
                self.announce(format!("You used {}.", item.name), true);
                Ok(item)
            }
            Err(err) => {
                self.message = err.to_string();
                Err(err)
            }
        }
    }

    /// Buys one copy of a stock entry. The copy gets its own id.
    pub fn purchase(&mut self, stock_id: &str, rng: &mut impl Rng) -> Result<Item, GameError> {
        let shop = match (&self.phase, self.shop.as_ref()) {
            (CombatPhase::Shop, Some(shop)) => shop,
            _ => return Err(GameError::ShopClosed),
        };
        let item = shop
            .sell(stock_id, rng)
            .ok_or_else(|| GameError::UnknownShopItem {
                id: stock_id.to_string(),
            })?;

        if !self.state.spend_coins(item.value) {
            let err = GameError::InsufficientFunds {
                price: item.value,
                available: self.state.player.coins.total(),
            };
            self.message = err.to_string();
            return Err(err);
        }

        info!(item = %item.name, price = item.value, "purchase");
        self.announce(format!("You bought {} for {}c.", item.name, item.value), true);
        self.state.add_to_inventory(item.clone());
        Ok(item)
    }

    /// Leaves the merchant and spawns the next monster at the hero's level.
    pub fn close_shop(&mut self, rng: &mut impl Rng) -> Result<Vec<CombatEvent>, GameError> {
        if self.phase != CombatPhase::Shop {
            return Err(GameError::ShopClosed);
        }
        self.shop = None;
        let mut events = Vec::new();
        let level = self.state.player.level;
        self.spawn_at(level, false, rng, &mut events);
        Ok(events)
    }

    fn announce(&mut self, message: String, is_player_action: bool) {
        self.combat_log.push(message.clone(), is_player_action);
        self.message = message;
    }

    fn spawn_at(&mut self, level: u32, stronger: bool, rng: &mut impl Rng, events: &mut Vec<CombatEvent>) {
        let monster = generate_monster(level, self.config.monster_hp_per_level, rng);
        info!(monster = %monster.name, level = monster.level, hp = monster.hp, stronger, "monster spawned");

        let line = if stronger {
            format!("A stronger {} appears! (Level {})", monster.name, monster.level)
        } else {
            format!("A {} appears! (Level {})", monster.name, monster.level)
        };
        events.push(CombatEvent::MonsterAppeared {
            name: monster.name.clone(),
            level: monster.level,
            stronger,
        });
        self.state.set_current_monster(Some(monster));
        self.phase = CombatPhase::PlayerTurn;
        self.announce(line, false);
    }

    fn begin_monster_turn(&mut self, rng: &mut impl Rng, events: &mut Vec<CombatEvent>) {
        let Some(level) = self.state.current_monster.as_ref().map(|m| m.level) else {
            return;
        };
        let defense_problem = generate_problem(level, rng);
        let incoming_damage = monster_strike_damage(level, self.state.player.defense);
        events.push(CombatEvent::MonsterTurnBegins { incoming_damage });
        self.phase = CombatPhase::MonsterTurn { defense_problem };
        self.announce(
            "The monster is attacking! Solve the problem to defend yourself!".to_string(),
            false,
        );
    }

    fn resolve_victory(&mut self, rng: &mut impl Rng, events: &mut Vec<CombatEvent>) {
        let Some(monster) = self.state.current_monster.take() else {
            return;
        };
        let rewards = &monster.rewards;

        self.state.gain_coin_reward(&rewards.coins);
        let leveled_up = self.state.gain_experience(rewards.experience);
        self.monsters_defeated += 1;
        info!(
            monster = %monster.name,
            level = monster.level,
            experience = rewards.experience,
            defeated = self.monsters_defeated,
            "monster defeated"
        );
        events.push(CombatEvent::MonsterDefeated {
            name: monster.name.clone(),
            experience: rewards.experience,
            coins: rewards.coins,
        });
        self.announce(
            format!(
                "You defeated the {}! +{} XP, {}",
                monster.name, rewards.experience, rewards.coins
            ),
            true,
        );

        if leveled_up {
            let new_level = self.state.player.level;
            info!(level = new_level, "level up");
            events.push(CombatEvent::LevelUp { new_level });
            self.announce(format!("Level up! You are now level {new_level}."), true);
        }

        let drops = roll_monster_drops(monster.level, self.config.monster_drop_chance, rng);
        for item in &drops {
            events.push(CombatEvent::LootDropped {
                item_name: item.name.clone(),
                item_type: item.item_type,
                rarity: item.rarity,
            });
            self.announce(format!("The {} dropped {}.", monster.name, item.name), false);
        }
        self.state.add_all_to_inventory(drops);

        if self.monsters_defeated % self.config.shop_interval.max(1) == 0 {
            let shop = Shop::for_level(self.state.player.level);
            info!(level = shop.level, "shop opened");
            self.shop = Some(shop);
            self.phase = CombatPhase::Shop;
            events.push(CombatEvent::ShopOpened);
            self.announce(
                "A merchant appears! Spend your coins before the next fight.".to_string(),
                false,
            );
            return;
        }

        let stronger = rng.gen::<f64>() < self.config.stronger_spawn_chance;
        let next_level = if stronger { monster.level + 1 } else { monster.level };
        self.spawn_at(next_level, stronger, rng, events);
    }

    fn game_over(&mut self, events: &mut Vec<CombatEvent>) {
        info!(
            level = self.state.player.level,
            defeated = self.monsters_defeated,
            "hero has fallen"
        );
        self.state.set_current_monster(None);
        self.pending = None;
        self.phase = CombatPhase::GameOver;
        events.push(CombatEvent::PlayerDefeated);
        self.announce("Game Over! Your hero has fallen...".to_string(), false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StumblePenalty;
    use crate::items::{generate_potion, ItemType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn started(config: GameConfig, rng: &mut ChaCha8Rng) -> CombatController {
        let mut controller = CombatController::new(config);
        controller.submit_name("Ada").unwrap();
        controller.spawn_monster(rng).unwrap();
        controller
    }

    fn right_answer(controller: &CombatController) -> String {
        controller.active_problem().unwrap().answer.to_string()
    }

    fn wrong_answer(controller: &CombatController) -> String {
        (controller.active_problem().unwrap().answer + 1).to_string()
    }

    #[test]
    fn test_new_controller_is_idle() {
        let controller = CombatController::default();
        assert_eq!(controller.phase(), &CombatPhase::Idle);
        assert!(controller.active_problem().is_none());
        assert!(controller.current_monster().is_none());
        assert!(controller.shop_stock().is_empty());
    }

    #[test]
    fn test_submit_name_rejects_bad_names() {
        let mut controller = CombatController::default();
        assert!(matches!(
            controller.submit_name("   "),
            Err(GameError::InvalidName { .. })
        ));
        assert_eq!(controller.player().name, "");
        controller.submit_name("  Ada  ").unwrap();
        assert_eq!(controller.player().name, "Ada");
    }

    #[test]
    fn test_spawn_enters_player_turn() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        assert_eq!(controller.phase(), &CombatPhase::PlayerTurn);
        assert!(controller.current_monster().is_some());
        assert!(matches!(
            controller.spawn_monster(&mut rng),
            Err(GameError::MonsterPresent)
        ));
    }

    #[test]
    fn test_invalid_answer_changes_nothing() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        let before = controller.state().clone();

        let result = controller.submit_answer("abc");
        assert!(matches!(result, Err(GameError::InvalidAnswer { .. })));
        assert_eq!(controller.message(), INVALID_ANSWER_MESSAGE);
        assert_eq!(controller.state(), &before);
        assert!(controller.pending().is_none());
        assert_eq!(controller.phase(), &CombatPhase::PlayerTurn);
    }

    #[test]
    fn test_answer_is_trimmed() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        let answer = format!("  {}\n", right_answer(&controller));
        let verdict = controller.submit_answer(&answer).unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.stance, Stance::Attack);
    }

    #[test]
    fn test_submit_then_advance() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        let monster_hp = controller.current_monster().unwrap().hp;

        let answer = right_answer(&controller);
        controller.submit_answer(&answer).unwrap();
        assert!(matches!(controller.pending(), Some(PendingEffect::HeroStrike { .. })));
        // Nothing lands until advance
        assert_eq!(controller.current_monster().unwrap().hp, monster_hp);
        assert!(matches!(
            controller.submit_answer(&answer),
            Err(GameError::EffectPending)
        ));

        let events = controller.advance(&mut rng).unwrap();
        assert!(matches!(events[0], CombatEvent::HeroStrike { damage: 30..=36, .. }));
        assert!(controller.current_monster().unwrap().hp < monster_hp);
        assert!(matches!(controller.phase(), CombatPhase::MonsterTurn { .. }));
        assert!(matches!(controller.advance(&mut rng), Err(GameError::NothingPending)));
    }

    #[test]
    fn test_block_returns_to_attack_problem() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        let attack_problem = controller.current_monster().unwrap().problem.clone();

        controller.play_answer(&right_answer(&controller), &mut rng).unwrap();
        let (verdict, events) = controller
            .play_answer(&right_answer(&controller), &mut rng)
            .unwrap();
        assert_eq!(verdict.stance, Stance::Defense);
        assert_eq!(events, vec![CombatEvent::Blocked]);
        assert_eq!(controller.phase(), &CombatPhase::PlayerTurn);
        assert_eq!(controller.active_problem(), Some(&attack_problem));
        assert_eq!(controller.player().current_hp, 100);
    }

    #[test]
    fn test_failed_defense_takes_monster_strike() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        let level = controller.current_monster().unwrap().level;

        controller.play_answer(&right_answer(&controller), &mut rng).unwrap();
        let (verdict, _) = controller
            .play_answer(&wrong_answer(&controller), &mut rng)
            .unwrap();
        assert!(!verdict.correct);
        let expected_damage = monster_strike_damage(level, 5);
        assert_eq!(controller.player().current_hp, 100 - expected_damage);
        assert_eq!(controller.phase(), &CombatPhase::PlayerTurn);
    }

    #[test]
    fn test_stumble_passes_turn_by_default() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        let level = controller.current_monster().unwrap().level;

        controller.play_answer(&wrong_answer(&controller), &mut rng).unwrap();
        assert_eq!(controller.player().current_hp, 100 - monster_strike_damage(level, 5));
        assert!(matches!(controller.phase(), CombatPhase::MonsterTurn { .. }));
    }

    #[test]
    fn test_gentle_stumble_keeps_the_turn() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::gentle(), &mut rng);

        controller.play_answer(&wrong_answer(&controller), &mut rng).unwrap();
        assert_eq!(controller.player().current_hp, 90);
        assert_eq!(controller.phase(), &CombatPhase::PlayerTurn);
    }

    #[test]
    fn test_death_is_game_over() {
        let mut rng = create_test_rng();
        let config = GameConfig {
            stumble_penalty: StumblePenalty::Flat(500),
            ..GameConfig::default()
        };
        let mut controller = started(config, &mut rng);

        let (_, events) = controller
            .play_answer(&wrong_answer(&controller), &mut rng)
            .unwrap();
        assert_eq!(events.last(), Some(&CombatEvent::PlayerDefeated));
        assert_eq!(controller.phase(), &CombatPhase::GameOver);
        assert!(controller.current_monster().is_none());
        assert!(matches!(controller.submit_answer("1"), Err(GameError::GameOver)));
        assert!(matches!(controller.despawn(), Err(GameError::GameOver)));
    }

    #[test]
    fn test_use_item_rejected_after_game_over() {
        let mut rng = create_test_rng();
        let config = GameConfig {
            stumble_penalty: StumblePenalty::Flat(500),
            ..GameConfig::default()
        };
        let mut controller = started(config, &mut rng);
        let potion = generate_potion(1, &mut rng);
        let id = potion.id.clone();
        controller.state.add_to_inventory(potion);

        controller.play_answer(&wrong_answer(&controller), &mut rng).unwrap();
        assert!(matches!(controller.use_item(&id), Err(GameError::GameOver)));
        assert_eq!(controller.inventory().len(), 1);
    }

    #[test]
    fn test_spawn_after_game_over_restarts() {
        let mut rng = create_test_rng();
        let config = GameConfig {
            stumble_penalty: StumblePenalty::Flat(500),
            ..GameConfig::default()
        };
        let mut controller = started(config, &mut rng);
        controller.monsters_defeated = 3;
        controller.play_answer(&wrong_answer(&controller), &mut rng).unwrap();

        let events = controller.spawn_monster(&mut rng).unwrap();
        assert!(matches!(events[0], CombatEvent::MonsterAppeared { stronger: false, .. }));
        assert_eq!(controller.phase(), &CombatPhase::PlayerTurn);
        assert_eq!(controller.monsters_defeated(), 0);
        assert_eq!(controller.player().current_hp, 100);
        assert_eq!(controller.player().name, "Ada");
    }

    #[test]
    fn test_victory_grants_rewards_and_spawns_next() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        let first_id = controller.current_monster().unwrap().id.clone();
        let level = controller.current_monster().unwrap().level;

        let mut defeated = false;
        for _ in 0..3 {
            let (_, events) = controller
                .play_answer(&right_answer(&controller), &mut rng)
                .unwrap();
            if events
                .iter()
                .any(|e| matches!(e, CombatEvent::MonsterDefeated { .. }))
            {
                defeated = true;
                break;
            }
            controller.play_answer(&right_answer(&controller), &mut rng).unwrap();
        }

        assert!(defeated);
        assert_eq!(controller.monsters_defeated(), 1);
        assert_eq!(controller.player().experience, 25 * level);
        assert!(controller.player().coins.total() > 0);
        assert_eq!(controller.phase(), &CombatPhase::PlayerTurn);
        assert_ne!(controller.current_monster().unwrap().id, first_id);
    }

    #[test]
    fn test_use_item_heals() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        controller.state.take_damage(60);
        let potion = Shop::for_level(1).sell("store_heal_potion", &mut rng).unwrap();
        let id = potion.id.clone();
        controller.state.add_to_inventory(potion);

        let used = controller.use_item(&id).unwrap();
        assert_eq!(used.item_type, ItemType::Potion);
        assert_eq!(controller.player().current_hp, 90);
        assert!(controller.inventory().is_empty());
        assert!(matches!(
            controller.use_item(&id),
            Err(GameError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_purchase_needs_open_shop() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        assert!(matches!(
            controller.purchase("store_heal_potion", &mut rng),
            Err(GameError::ShopClosed)
        ));
        assert!(matches!(controller.close_shop(&mut rng), Err(GameError::ShopClosed)));
    }

    #[test]
    fn test_shop_purchase_and_close() {
        let mut rng = create_test_rng();
        let config = GameConfig {
            shop_interval: 1,
            ..GameConfig::default()
        };
        let mut controller = started(config, &mut rng);
        while controller.phase() != &CombatPhase::Shop {
            controller.play_answer(&right_answer(&controller), &mut rng).unwrap();
        }
        assert!(controller.is_shop_open());
        assert!(controller.current_monster().is_none());
        assert_eq!(controller.shop_stock().len(), 5);

        let coins_before = controller.player().coins.total();
        let bag_before = controller.inventory().len();
        let bought = controller.purchase("store_heal_potion", &mut rng).unwrap();
        assert_ne!(bought.id, "store_heal_potion");
        assert_eq!(controller.player().coins.total(), coins_before - 10);
        assert!(controller.inventory().len() >= bag_before);
        assert!(controller.inventory().iter().any(|item| item.id == bought.id
            || item.stacks_with(&bought)));

        assert!(matches!(
            controller.purchase("store_dragon", &mut rng),
            Err(GameError::UnknownShopItem { .. })
        ));

        controller.close_shop(&mut rng).unwrap();
        assert_eq!(controller.phase(), &CombatPhase::PlayerTurn);
        assert!(controller.shop_stock().is_empty());
    }

    #[test]
    fn test_purchase_insufficient_funds() {
        let mut rng = create_test_rng();
        let config = GameConfig {
            shop_interval: 1,
            ..GameConfig::default()
        };
        let mut controller = started(config, &mut rng);
        while controller.phase() != &CombatPhase::Shop {
            controller.play_answer(&right_answer(&controller), &mut rng).unwrap();
        }
        controller.state.player.coins = crate::character::Coins::default();

        let result = controller.purchase("store_weapon", &mut rng);
        assert_eq!(
            result,
            Err(GameError::InsufficientFunds {
                price: 40,
                available: 0
            })
        );
        assert_eq!(controller.player().coins.total(), 0);
    }

    #[test]
    fn test_despawn_returns_to_idle() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        controller.despawn().unwrap();
        assert_eq!(controller.phase(), &CombatPhase::Idle);
        assert!(controller.current_monster().is_none());
        assert!(matches!(controller.submit_answer("1"), Err(GameError::NoActiveProblem)));
    }

    #[test]
    fn test_every_transition_is_logged() {
        let mut rng = create_test_rng();
        let mut controller = started(GameConfig::default(), &mut rng);
        let logged = controller.combat_log().len();
        controller.play_answer(&right_answer(&controller), &mut rng).unwrap();
        assert!(controller.combat_log().len() > logged);
        assert_eq!(
            controller.combat_log().latest().map(|e| e.message.as_str()),
            Some(controller.message())
        );
    }
}
