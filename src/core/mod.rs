//! Core engine types: identifiers, players, actions, dice, RNG, configuration,
//! errors.
//!
//! Everything here is plain data or a small leaf service. The board and the
//! rules engine build on top of it.

pub mod action;
pub mod config;
pub mod dice;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod player;
pub mod rng;

pub use action::{ActionKind, ActionRecord, ActionSet, Command};
pub use config::{
    BoardConfig, CardConfig, Currency, GameConfig, LocationConfig, LocationKindConfig, RoleConfig,
    TakeConfig, Upgrade,
};
pub use dice::{Dice, WrapRoll, DIE_SIDES};
pub use error::{CommandResult, ConfigError, GameError, RuleError};
pub use geometry::{Area, Position, TokenLayout};
pub use ids::{LocationId, RoleId, RoleSlot};
pub use player::{Player, PlayerId, TurnFlags, MAX_RANK, PLAYER_COLORS};
pub use rng::{DieSource, GameRng, ScriptedDice};
