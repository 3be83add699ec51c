//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - `BoardConfig`: locations, adjacency, takes, off-card roles, upgrades
//! - `CardConfig`: the scene card catalog
//! - `GameConfig`: player count and the starting table derived from it
//!
//! Board and card data derive `serde` so they can arrive as JSON or be built
//! in code (see [`crate::board::standard_board`]).

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::geometry::{Area, TokenLayout};
use super::player::MAX_RANK;

/// Which purse an upgrade is paid from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Dollars,
    Credits,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Dollars => f.write_str("dollars"),
            Currency::Credits => f.write_str("credits"),
        }
    }
}

/// One casting office tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    /// Rank the player ends up at.
    pub rank: u8,
    pub currency: Currency,
    pub price: u32,
    #[serde(default)]
    pub area: Area,
}

impl Upgrade {
    #[must_use]
    pub fn new(rank: u8, currency: Currency, price: u32) -> Self {
        Self {
            rank,
            currency,
            price,
            area: Area::default(),
        }
    }
}

/// A role as described in board or card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfig {
    pub name: String,
    /// Minimum player rank.
    pub rank: u8,
    /// Flavor line.
    #[serde(default)]
    pub line: String,
    #[serde(default)]
    pub area: Area,
}

impl RoleConfig {
    pub fn new(name: impl Into<String>, rank: u8) -> Self {
        Self {
            name: name.into(),
            rank,
            line: String::new(),
            area: Area::default(),
        }
    }

    /// Set the role's area (builder pattern).
    #[must_use]
    pub fn with_area(mut self, area: Area) -> Self {
        self.area = area;
        self
    }
}

/// A shot marker on a set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeConfig {
    pub number: u8,
    #[serde(default)]
    pub area: Area,
}

/// Variant-specific location data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationKindConfig {
    Set {
        takes: Vec<TakeConfig>,
        roles: Vec<RoleConfig>,
    },
    Trailer,
    CastingOffice {
        upgrades: Vec<Upgrade>,
    },
}

/// One location on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    pub kind: LocationKindConfig,
    pub neighbors: Vec<String>,
    #[serde(default)]
    pub area: Area,
    #[serde(default)]
    pub layout: TokenLayout,
}

impl LocationConfig {
    /// A set with `takes` shot markers and the given off-card roles.
    pub fn set(name: impl Into<String>, takes: u8, roles: Vec<RoleConfig>) -> Self {
        let takes = (1..=takes)
            .map(|number| TakeConfig {
                number,
                area: Area::default(),
            })
            .collect();
        Self {
            name: name.into(),
            kind: LocationKindConfig::Set { takes, roles },
            neighbors: Vec::new(),
            area: Area::default(),
            layout: TokenLayout::default(),
        }
    }

    pub fn trailer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: LocationKindConfig::Trailer,
            neighbors: Vec::new(),
            area: Area::default(),
            layout: TokenLayout::room(),
        }
    }

    pub fn casting_office(name: impl Into<String>, upgrades: Vec<Upgrade>) -> Self {
        Self {
            name: name.into(),
            kind: LocationKindConfig::CastingOffice { upgrades },
            neighbors: Vec::new(),
            area: Area::default(),
            layout: TokenLayout::room(),
        }
    }

    /// Set neighbor names (builder pattern).
    #[must_use]
    pub fn with_neighbors(mut self, neighbors: &[&str]) -> Self {
        self.neighbors = neighbors.iter().map(|n| (*n).to_string()).collect();
        self
    }

    /// Set display area (builder pattern).
    #[must_use]
    pub fn with_area(mut self, area: Area) -> Self {
        self.area = area;
        self
    }

    /// Set token layout (builder pattern).
    #[must_use]
    pub fn with_layout(mut self, layout: TokenLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(self.kind, LocationKindConfig::Set { .. })
    }
}

/// Complete board description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub locations: Vec<LocationConfig>,
}

impl BoardConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locations: Vec::new(),
        }
    }

    /// Add a location (builder pattern).
    #[must_use]
    pub fn with_location(mut self, location: LocationConfig) -> Self {
        self.locations.push(location);
        self
    }

    /// Number of set locations.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.locations.iter().filter(|l| l.is_set()).count()
    }

    /// Decode a board from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// One scene card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    pub name: String,
    /// Scene number printed on the card.
    pub number: u32,
    #[serde(default)]
    pub description: String,
    /// Act threshold and wrap-bonus dice count.
    pub budget: u8,
    #[serde(default)]
    pub image: String,
    pub roles: Vec<RoleConfig>,
}

impl CardConfig {
    pub fn new(name: impl Into<String>, number: u32, budget: u8, roles: Vec<RoleConfig>) -> Self {
        Self {
            name: name.into(),
            number,
            description: String::new(),
            budget,
            image: String::new(),
            roles,
        }
    }

    /// Decode a card catalog (a JSON array of cards).
    pub fn catalog_from_json(json: &str) -> Result<Vec<Self>, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Per-game settings derived from the player count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// 2..=8
    pub player_count: usize,
    /// Days to play.
    pub days: u8,
    pub starting_rank: u8,
    pub starting_credits: u32,
    pub starting_dollars: u32,
    /// Token icons resolve to `{prefix}{color}{rank}.png`.
    pub token_prefix: String,
}

impl GameConfig {
    /// Starting table for `player_count` players.
    ///
    /// | players | days | rank | credits |
    /// |---------|------|------|---------|
    /// | 2–3     | 3    | 1    | 0       |
    /// | 4       | 4    | 1    | 0       |
    /// | 5       | 4    | 1    | 2       |
    /// | 6       | 4    | 1    | 4       |
    /// | 7–8     | 4    | 2    | 0       |
    pub fn for_players(player_count: usize) -> Result<Self, ConfigError> {
        if !(2..=8).contains(&player_count) {
            return Err(ConfigError::PlayerCount(player_count));
        }

        let days = if player_count <= 3 { 3 } else { 4 };
        let (starting_rank, starting_credits) = match player_count {
            5 => (1, 2),
            6 => (1, 4),
            7 | 8 => (2, 0),
            _ => (1, 0),
        };

        Ok(Self {
            player_count,
            days,
            starting_rank,
            starting_credits,
            starting_dollars: 0,
            token_prefix: "/resources/images/tokens/".to_string(),
        })
    }
}

/// Check that a role or upgrade rank sits on the 1..=6 ladder.
pub(crate) fn check_rank(what: impl Into<String>, rank: u8, min: u8) -> Result<(), ConfigError> {
    if (min..=MAX_RANK).contains(&rank) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRank {
            what: what.into(),
            rank,
        })
    }
}
