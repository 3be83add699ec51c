//! Shared fixtures for integration tests.

#![allow(dead_code)]

use deadwood::{CardConfig, GameBuilder, GameManager, RoleConfig, ScriptedDice};

/// `n` scene cards with budgets 2..=5 and one to three on-card roles.
/// Every card has a rank 1 part.
pub fn catalog(n: u32) -> Vec<CardConfig> {
    (1..=n)
        .map(|i| {
            let budget = 2 + (i % 4) as u8;
            let mut roles = vec![RoleConfig::new(format!("Lead {i}"), 1)];
            if i % 3 != 0 {
                roles.push(RoleConfig::new(format!("Sidekick {i}"), 2));
            }
            if i % 3 == 2 {
                roles.push(RoleConfig::new(format!("Star {i}"), 3));
            }
            CardConfig::new(format!("Scene {i}"), i, budget, roles)
        })
        .collect()
}

/// Standard board, cards dealt in catalog order, scripted dice.
pub fn scripted_game(players: usize, rolls: Vec<u8>) -> GameManager {
    GameBuilder::standard(catalog(40))
        .player_count(players)
        .unshuffled()
        .dice(Box::new(ScriptedDice::new(rolls)))
        .build()
        .unwrap()
}

/// Capture engine logs in test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("deadwood=debug"))
        .with_test_writer()
        .try_init();
}
