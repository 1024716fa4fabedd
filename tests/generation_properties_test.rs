//! Property tests for problem generation, the purse and leveling.

use math_legends::character::{max_hp_for_level, Coins, Player};
use math_legends::core::GameState;
use math_legends::monsters::generate_monster;
use math_legends::problems::{generate_problem, Operation};
use math_legends::shop::Shop;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Splits "a op b = ?" into its operands.
fn operands(question: &str) -> (i64, i64) {
    let parts: Vec<&str> = question.split_whitespace().collect();
    assert_eq!(parts.len(), 5, "unexpected question shape: {question}");
    assert_eq!(&parts[3..], ["=", "?"]);
    (parts[0].parse().unwrap(), parts[2].parse().unwrap())
}

proptest! {
    #[test]
    fn prop_question_matches_answer(level in 0u32..60, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let problem = generate_problem(level, &mut rng);
        let (a, b) = operands(&problem.question);

        let expected = match problem.operation {
            Operation::Addition => a + b,
            Operation::Subtraction => a - b,
            Operation::Multiplication => a * b,
            Operation::Division => {
                prop_assert!(b > 0);
                prop_assert_eq!(a % b, 0, "division must be exact");
                a / b
            }
        };
        prop_assert_eq!(problem.answer, expected);
        prop_assert_eq!(problem.difficulty, level);
    }

    #[test]
    fn prop_division_is_exact(level in 9u32..100, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let problem = generate_problem(level, &mut rng);
        prop_assert_eq!(problem.operation, Operation::Division);
        let (dividend, divisor) = operands(&problem.question);
        prop_assert_eq!(divisor * problem.answer, dividend);
    }

    #[test]
    fn prop_subtraction_never_negative(level in 3u32..6, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let problem = generate_problem(level, &mut rng);
        prop_assert_eq!(problem.operation, Operation::Subtraction);
        prop_assert!(problem.answer >= 0);
    }

    #[test]
    fn prop_spend_renormalizes_or_refuses(
        gold in 0u32..50,
        silver in 0u32..50,
        copper in 0u32..50,
        amount in 0u32..8_000,
    ) {
        let mut coins = Coins::new(gold, silver, copper);
        let before = coins;
        let total = before.total();
        let amount = u64::from(amount);

        if coins.spend(amount as u32) {
            prop_assert!(total >= amount);
            prop_assert_eq!(coins.total(), total - amount);
            prop_assert!(coins.silver < 10 && coins.copper < 10);
        } else {
            prop_assert!(total < amount);
            prop_assert_eq!(coins, before);
        }
    }

    #[test]
    fn prop_spend_from_overflowing_purse_keeps_total(
        gold in (u32::MAX - 1_000)..=u32::MAX,
        silver in (u32::MAX - 1_000)..=u32::MAX,
        copper in (u32::MAX - 1_000)..=u32::MAX,
        amount in any::<u32>(),
    ) {
        let mut coins = Coins::new(gold, silver, copper);
        let total = coins.total();

        prop_assert!(coins.spend(amount));
        prop_assert_eq!(coins.total(), total - u64::from(amount));
        prop_assert_eq!(coins.gold, u32::MAX);
    }

    #[test]
    fn prop_spend_from_large_gold_purse_is_canonical(
        gold in 50_000_000u32..=u32::MAX,
        amount in any::<u32>(),
    ) {
        let mut coins = Coins::new(gold, 0, 0);
        let total = coins.total();

        prop_assert!(coins.spend(amount));
        prop_assert_eq!(coins.total(), total - u64::from(amount));
        prop_assert!(coins.silver < 10 && coins.copper < 10);
    }

    #[test]
    fn prop_threshold_xp_levels_once(level in 1u32..80) {
        let mut player = Player::new("Climber".to_string());
        player.level = level;
        player.max_hp = max_hp_for_level(level);
        player.current_hp = 1;

        prop_assert!(player.gain_experience(level * 100));
        prop_assert_eq!(player.level, level + 1);
        prop_assert_eq!(player.experience, 0);
        prop_assert_eq!(player.max_hp, 100 + level * 20);
        prop_assert_eq!(player.current_hp, player.max_hp);
    }

    #[test]
    fn prop_monster_level_wobbles_by_one(spawn_level in 1u32..40, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let monster = generate_monster(spawn_level, 15, &mut rng);
        prop_assert!(monster.level >= spawn_level.saturating_sub(1).max(1));
        prop_assert!(monster.level <= spawn_level + 1);
        prop_assert_eq!(monster.hp, 50 + monster.level * 15);
        prop_assert_eq!(monster.max_hp, monster.hp);
        prop_assert_eq!(monster.rewards.experience, 25 * monster.level);
        prop_assert_eq!(monster.problem.difficulty, monster.level);
    }

    #[test]
    fn prop_stackable_items_merge(count in 1u32..20) {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(count));
        let shop = Shop::for_level(1);
        let mut state = GameState::new("Stacker".to_string());
        for _ in 0..count {
            state.add_to_inventory(shop.sell("store_heal_potion", &mut rng).unwrap());
        }
        prop_assert_eq!(state.inventory.len(), 1);
        prop_assert_eq!(state.inventory.items()[0].quantity, Some(count));
    }
}
