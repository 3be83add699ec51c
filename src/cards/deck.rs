//! The scene deck.
//!
//! Shuffled once when built, then dealt front to back. Nothing is ever
//! returned to it.

use super::scene::SceneCard;
use crate::core::config::CardConfig;
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;

/// Draw-once pool of scene cards.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<SceneCard>,
    next: usize,
}

impl Deck {
    /// Deck in the given order. Mostly useful for tests.
    #[must_use]
    pub fn in_order(cards: Vec<SceneCard>) -> Self {
        Self { cards, next: 0 }
    }

    /// Deck shuffled with a uniform permutation.
    #[must_use]
    pub fn shuffled(mut cards: Vec<SceneCard>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut cards);
        Self::in_order(cards)
    }

    /// Validate a catalog and shuffle it.
    pub fn from_catalog(catalog: &[CardConfig], rng: &mut GameRng) -> Result<Self, ConfigError> {
        let cards = catalog
            .iter()
            .map(SceneCard::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::shuffled(cards, rng))
    }

    /// Next card in deck order.
    pub fn draw_scene(&mut self) -> Result<SceneCard, ConfigError> {
        let card = self.cards.get(self.next).cloned().ok_or(ConfigError::DeckExhausted)?;
        self.next += 1;
        Ok(card)
    }

    /// Cards in the deck, drawn or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }
}
