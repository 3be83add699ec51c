//! Roles: the parts players take on a set.

use serde::{Deserialize, Serialize};

use crate::core::config::RoleConfig;
use crate::core::geometry::{Area, Position};

/// A castable part.
///
/// On-card roles belong to the scene card and vanish when the card is
/// replaced. Off-card roles belong to the set and are reused every day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    /// Minimum player rank.
    pub rank: u8,
    pub on_card: bool,
    pub taken: bool,
    pub line: String,
    /// For on-card roles, relative to the card; otherwise absolute.
    pub area: Area,
}

impl Role {
    #[must_use]
    pub fn from_config(config: &RoleConfig, on_card: bool) -> Self {
        Self {
            name: config.name.clone(),
            rank: config.rank,
            on_card,
            taken: false,
            line: config.line.clone(),
            area: config.area,
        }
    }

    /// Free and within reach of a player of `rank`.
    #[must_use]
    pub fn is_open_to(&self, rank: u8) -> bool {
        !self.taken && self.rank <= rank
    }

    /// Where a player's token sits while holding this role.
    ///
    /// On-card role areas are offsets into the card, which is drawn at the
    /// set's area.
    #[must_use]
    pub fn token_position(&self, set_area: &Area) -> Position {
        if self.on_card {
            Position::new(self.area.x + set_area.x, self.area.y + set_area.y)
        } else {
            Position::new(self.area.x + 3, self.area.y + 3)
        }
    }
}
