//! Game assembly.

use tracing::info;

use super::manager::GameManager;
use crate::board::{standard_board, Board};
use crate::cards::{Deck, SceneCard};
use crate::core::config::{BoardConfig, CardConfig, GameConfig};
use crate::core::dice::Dice;
use crate::core::error::ConfigError;
use crate::core::rng::{DieSource, GameRng};

/// Builder for a [`GameManager`].
///
/// ```
/// use deadwood::core::{CardConfig, RoleConfig};
/// use deadwood::rules::GameBuilder;
///
/// let cards: Vec<_> = (1..=40)
///     .map(|i| CardConfig::new(format!("Scene {i}"), i, 3, vec![RoleConfig::new("Lead", 1)]))
///     .collect();
///
/// let game = GameBuilder::standard(cards).player_count(3).seed(7).build().unwrap();
/// assert_eq!(game.days(), 3);
/// assert_eq!(game.players().len(), 3);
/// ```
#[derive(Debug)]
pub struct GameBuilder {
    board: BoardConfig,
    cards: Vec<CardConfig>,
    player_count: usize,
    days: Option<u8>,
    seed: Option<u64>,
    dice: Option<Box<dyn DieSource>>,
    shuffle: bool,
    token_prefix: Option<String>,
}

impl GameBuilder {
    pub fn new(board: BoardConfig, cards: Vec<CardConfig>) -> Self {
        Self {
            board,
            cards,
            player_count: 2,
            days: None,
            seed: None,
            dice: None,
            shuffle: true,
            token_prefix: None,
        }
    }

    /// Builder on the classic ten-set board.
    pub fn standard(cards: Vec<CardConfig>) -> Self {
        Self::new(standard_board(), cards)
    }

    /// 2..=8, checked at `build`.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Override the day count from the setup table.
    #[must_use]
    pub fn days(mut self, days: u8) -> Self {
        self.days = Some(days);
        self
    }

    /// Seed deck shuffling and dice. Without one the seed comes from OS
    /// entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the seeded dice with another die source.
    #[must_use]
    pub fn dice(mut self, source: Box<dyn DieSource>) -> Self {
        self.dice = Some(source);
        self
    }

    /// Deal cards in catalog order.
    #[must_use]
    pub fn unshuffled(mut self) -> Self {
        self.shuffle = false;
        self
    }

    #[must_use]
    pub fn token_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.token_prefix = Some(prefix.into());
        self
    }

    /// Validate everything and deal the first day.
    pub fn build(self) -> Result<GameManager, ConfigError> {
        let mut config = GameConfig::for_players(self.player_count)?;
        if let Some(days) = self.days {
            config.days = days;
        }
        if let Some(prefix) = self.token_prefix {
            config.token_prefix = prefix;
        }
        if config.days == 0 {
            return Err(ConfigError::NoDays);
        }

        let needed = usize::from(config.days) * self.board.set_count();
        if self.cards.len() < needed {
            return Err(ConfigError::InsufficientCards {
                needed,
                available: self.cards.len(),
            });
        }

        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = if self.shuffle {
            Deck::from_catalog(&self.cards, &mut rng.for_context("deck"))?
        } else {
            let cards = self
                .cards
                .iter()
                .map(SceneCard::from_config)
                .collect::<Result<Vec<_>, _>>()?;
            Deck::in_order(cards)
        };

        let board = Board::new(&self.board, deck)?;
        let source: Box<dyn DieSource> = match self.dice {
            Some(source) => source,
            None => Box::new(rng.for_context("dice")),
        };

        info!(
            board = board.name(),
            players = config.player_count,
            days = config.days,
            seed = rng.seed(),
            "game set up"
        );
        GameManager::new(config, board, Dice::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RoleConfig;

    fn catalog(n: u32) -> Vec<CardConfig> {
        (1..=n)
            .map(|i| CardConfig::new(format!("Scene {i}"), i, 2, vec![RoleConfig::new("Lead", 1)]))
            .collect()
    }

    #[test]
    fn test_setup_table_applied() {
        for players in 2..=8 {
            let game = GameBuilder::standard(catalog(40))
                .player_count(players)
                .seed(1)
                .build()
                .unwrap();
            let expected = GameConfig::for_players(players).unwrap();
            assert_eq!(game.days(), expected.days);
            for p in game.players() {
                assert_eq!(p.rank, expected.starting_rank);
                assert_eq!(p.credits, expected.starting_credits);
                assert_eq!(p.dollars, 0);
                assert_eq!(p.location, game.board().trailer());
            }
        }
    }

    #[test]
    fn test_bad_player_count() {
        let err = GameBuilder::standard(catalog(40)).player_count(9).build().unwrap_err();
        assert_eq!(err, ConfigError::PlayerCount(9));
    }

    #[test]
    fn test_insufficient_cards() {
        let err = GameBuilder::standard(catalog(29)).player_count(2).build().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InsufficientCards {
                needed: 30,
                available: 29
            }
        );
    }

    #[test]
    fn test_zero_days() {
        let err = GameBuilder::standard(catalog(40)).days(0).build().unwrap_err();
        assert_eq!(err, ConfigError::NoDays);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = GameBuilder::standard(catalog(40)).seed(11).build().unwrap();
        let b = GameBuilder::standard(catalog(40)).seed(11).build().unwrap();
        let names = |g: &GameManager| g.cards().into_iter().map(|c| c.number).collect::<Vec<_>>();
        assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn test_unshuffled_deals_in_order() {
        let game = GameBuilder::standard(catalog(30)).unshuffled().build().unwrap();
        let numbers: Vec<_> = game.cards().into_iter().map(|c| c.number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_trailer_grid() {
        let game = GameBuilder::standard(catalog(40)).player_count(6).seed(2).build().unwrap();
        let area = game.board().location(game.board().trailer()).area;
        let positions: Vec<_> = game
            .players()
            .iter()
            .map(|p| (p.position.x - area.x, p.position.y - area.y))
            .collect();
        assert_eq!(
            positions,
            vec![(10, 80), (55, 80), (100, 80), (145, 80), (10, 125), (55, 125)]
        );
    }
}
