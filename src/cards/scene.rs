//! Scene cards.
//!
//! A `SceneCard` is built from a [`CardConfig`] once, at deck construction,
//! and then moves by value: deck → set → discarded at the next deal.

use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::core::config::{check_rank, CardConfig};
use crate::core::error::ConfigError;

/// Image shown for a scene once it has wrapped.
pub const CARD_BACK_IMAGE: &str = "/resources/images/cards/CardBack.jpg";

/// Largest budget a card may carry. A wrap rolls one die per budget point.
pub const MAX_BUDGET: u8 = 6;

/// Scene card in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneCard {
    pub name: String,
    pub number: u32,
    pub description: String,
    /// Act threshold and wrap-bonus dice count.
    pub budget: u8,
    pub image: String,
    /// On-card roles in card order.
    pub roles: Vec<Role>,
    /// True once the hosting set has no takes left.
    pub wrapped: bool,
}

impl SceneCard {
    /// Validate and build a card.
    pub fn from_config(config: &CardConfig) -> Result<Self, ConfigError> {
        if !(1..=MAX_BUDGET).contains(&config.budget) {
            return Err(ConfigError::InvalidBudget {
                card: config.name.clone(),
                budget: config.budget,
            });
        }
        for role in &config.roles {
            check_rank(format!("role {} on {}", role.name, config.name), role.rank, 1)?;
        }

        Ok(Self {
            name: config.name.clone(),
            number: config.number,
            description: config.description.clone(),
            budget: config.budget,
            image: config.image.clone(),
            roles: config.roles.iter().map(|r| Role::from_config(r, true)).collect(),
            wrapped: false,
        })
    }

    /// Image the board should show for this card.
    #[must_use]
    pub fn displayed_image(&self) -> &str {
        if self.wrapped {
            CARD_BACK_IMAGE
        } else {
            &self.image
        }
    }

    /// Practice chips beyond which rehearsing is pointless.
    #[must_use]
    pub fn max_practice_chips(&self) -> u8 {
        self.budget.saturating_sub(1)
    }
}
