//! Property checks for dice, deck and wrap distribution.

use deadwood::cards::{Deck, SceneCard};
use deadwood::core::Dice;
use deadwood::rules::distribute_bonus;
use deadwood::{CardConfig, ConfigError, GameRng, RoleConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_wrap_roll_shape(seed in any::<u64>(), budget in 0u8..=6) {
        let mut dice = Dice::new(Box::new(GameRng::new(seed)));
        let roll = dice.wrap_roll(budget);

        prop_assert_eq!(roll.len(), usize::from(budget));
        prop_assert!(roll.iter().all(|d| (1..=6).contains(d)));
        prop_assert!(roll.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_roll_die_in_range(seed in any::<u64>()) {
        let mut dice = Dice::new(Box::new(GameRng::new(seed)));
        for _ in 0..32 {
            let face = dice.roll_die();
            prop_assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_deck_draws_each_card_once(seed in any::<u64>(), size in 1u32..60) {
        let catalog: Vec<CardConfig> = (1..=size)
            .map(|i| CardConfig::new(format!("Scene {i}"), i, 2, vec![RoleConfig::new("Lead", 1)]))
            .collect();
        let mut deck = Deck::from_catalog(&catalog, &mut GameRng::new(seed)).unwrap();

        let mut drawn: Vec<u32> = (0..size)
            .map(|_| deck.draw_scene().map(|c| c.number).unwrap())
            .collect();
        let extra: Result<SceneCard, ConfigError> = deck.draw_scene();
        prop_assert_eq!(extra, Err(ConfigError::DeckExhausted));

        drawn.sort_unstable();
        prop_assert_eq!(drawn, (1..=size).collect::<Vec<_>>());
    }

    #[test]
    fn test_bonus_pays_every_die(
        dice in prop::collection::vec(1u8..=6, 0..8),
        ranks in prop::collection::vec(1u8..=6, 1..4),
    ) {
        let mut dice = dice;
        dice.sort_unstable_by(|a, b| b.cmp(a));
        let shares = distribute_bonus(&dice, &ranks);

        prop_assert_eq!(shares.len(), ranks.len());
        let paid: u32 = shares.iter().sum();
        let rolled: u32 = dice.iter().map(|&d| u32::from(d)).sum();
        prop_assert_eq!(paid, rolled);

        // The top-ranked role gets the best die.
        if let Some(&best) = dice.first() {
            let top = ranks
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
                .map_or(0, |(i, _)| i);
            prop_assert!(shares[top] >= u32::from(best));
        }
    }
}
