//! # deadwood
//!
//! Rules engine for a Deadwood-style film studio board game for 2 to 8
//! players.
//!
//! ## Design Principles
//!
//! 1. **Engine, not presentation**: The crate owns the turn and day state
//!    machine, casting, acting and scene wraps, and scoring. Rendering and
//!    prompts belong to whatever drives it.
//!
//! 2. **Validate, then mutate**: Every command either succeeds completely or
//!    returns an error and leaves the game untouched.
//!
//! 3. **Configuration Over Convention**: Boards and card catalogs are data
//!    (`BoardConfig`, `CardConfig`), decoded from JSON or built in code.
//!
//! ## Architecture
//!
//! - **Injected randomness**: Dice and the deck shuffle draw from seeded
//!   ChaCha8 streams; tests swap in `ScriptedDice`.
//!
//! - **Stable role ids**: Roles are addressed by set and slot, never by
//!   reference, so there is no shared mutable role state.
//!
//! - **Persistent history**: Accepted commands are kept in an `im::Vector`.
//!
//! ## Modules
//!
//! - `core`: Ids, players, actions, dice, RNG, configuration, errors
//! - `cards`: Roles, scene cards and the deck
//! - `board`: Location graph, set state and the standard board
//! - `rules`: `GameManager`, `GameBuilder`, wrap payouts and scoring
//!
//! ## Example
//!
//! ```
//! use deadwood::{ActionKind, CardConfig, Command, GameBuilder, RoleConfig};
//!
//! let cards: Vec<_> = (1..=30)
//!     .map(|i| CardConfig::new(format!("Scene {i}"), i, 2, vec![RoleConfig::new("Lead", 1)]))
//!     .collect();
//! let mut game = GameBuilder::standard(cards).seed(3).build().unwrap();
//!
//! assert!(game.available_actions().contains(ActionKind::Move));
//! game.apply(&Command::Move { to: "Saloon".into() }).unwrap();
//! game.take_role("Lead").unwrap();
//! game.end_turn().unwrap();
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionRecord, ActionSet, BoardConfig, CardConfig, Command, CommandResult,
    ConfigError, Currency, DieSource, GameConfig, GameError, GameRng, LocationConfig, LocationId,
    Player, PlayerId, RoleConfig, RoleId, RuleError, ScriptedDice, Upgrade, PLAYER_COLORS,
};

pub use crate::board::{standard_board, Board};

pub use crate::cards::{Deck, Role, SceneCard};

pub use crate::rules::{
    ActOutcome, CommandOutcome, GameBuilder, GameManager, GameResult, Standing, WrapReport,
};
