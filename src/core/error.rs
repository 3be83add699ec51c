//! Error types.
//!
//! Two classes of failure exist:
//!
//! - [`ConfigError`]: the board, card catalog or player count cannot form a
//!   playable game. Returned from setup; a game is never constructed.
//! - [`RuleError`]: a command that the current state does not allow. The
//!   engine rejects it and leaves every piece of state untouched.
//!
//! Commands return [`GameError`], which wraps both.

use thiserror::Error;

use super::action::ActionKind;
use super::config::Currency;

/// Fatal setup error. No partially-built game survives one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Player count outside 2..=8.
    #[error("player count must be 2-8, got {0}")]
    PlayerCount(usize),

    /// A game must last at least one day.
    #[error("a game needs at least one day")]
    NoDays,

    /// Two locations share a name.
    #[error("duplicate location: {0}")]
    DuplicateLocation(String),

    /// A neighbor list names a location that does not exist.
    #[error("{location} lists unknown neighbor {neighbor}")]
    UnknownNeighbor {
        /// Location whose neighbor list is broken.
        location: String,
        /// The missing name.
        neighbor: String,
    },

    /// `from` lists `to` as a neighbor but not the other way around.
    #[error("{from} -> {to} has no matching edge back")]
    AsymmetricNeighbor {
        /// Location listing the edge.
        from: String,
        /// Location missing the reverse edge.
        to: String,
    },

    /// The board must have exactly one trailer.
    #[error("board needs exactly one trailer, found {0}")]
    TrailerCount(usize),

    /// The board must have exactly one casting office.
    #[error("board needs exactly one casting office, found {0}")]
    CastingOfficeCount(usize),

    /// A day ends when one scene is left, so at least two sets are needed.
    #[error("board needs at least 2 sets, found {0}")]
    TooFewSets(usize),

    /// A set without takes could never wrap.
    #[error("set {0} has no takes")]
    NoTakes(String),

    /// Scene budgets run from 1 to 6.
    #[error("card {card} has invalid budget {budget}")]
    InvalidBudget {
        /// Card name.
        card: String,
        /// Offending budget.
        budget: u8,
    },

    /// Role or upgrade rank outside the 1..=6 ladder.
    #[error("{what} has invalid rank {rank}")]
    InvalidRank {
        /// Role or upgrade description.
        what: String,
        /// Offending rank.
        rank: u8,
    },

    /// The catalog cannot cover every set on every day.
    #[error("need {needed} scene cards, catalog has {available}")]
    InsufficientCards {
        /// days × sets
        needed: usize,
        /// Cards in the catalog.
        available: usize,
    },

    /// A draw was attempted after the last card was dealt.
    #[error("no more cards in deck")]
    DeckExhausted,

    /// Structured configuration could not be decoded.
    #[error("config parse error: {0}")]
    Parse(String),
}

/// A command the current state does not allow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The last day has ended.
    #[error("the game is over")]
    GameOver,

    /// The action is not in `available_actions()` right now.
    #[error("{0} is not available")]
    ActionUnavailable(ActionKind),

    /// Move target is not adjacent to the player's location.
    #[error("{0} is not adjacent")]
    NotAdjacent(String),

    /// No untaken role of that name the player qualifies for.
    #[error("role {0} is not available")]
    RoleUnavailable(String),

    /// Practice chips already guarantee success.
    #[error("practice chips already at {chips} for budget {budget}")]
    RehearsalCapped {
        /// Current chips.
        chips: u8,
        /// Scene budget.
        budget: u8,
    },

    /// No such tier at the casting office, or it is not above the player's rank.
    #[error("no rank {rank} upgrade for {currency}")]
    UpgradeUnavailable {
        /// Requested rank.
        rank: u8,
        /// Requested currency.
        currency: Currency,
    },

    /// The player cannot pay for the tier.
    #[error("upgrade costs {price} {currency}, player has {balance}")]
    InsufficientFunds {
        /// Tier price.
        price: u32,
        /// Currency used.
        currency: Currency,
        /// What the player holds.
        balance: u32,
    },

    /// Player index out of range.
    #[error("unknown player index {0}")]
    UnknownPlayer(usize),
}

/// Error returned by engine commands.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Rejected command.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Setup data failed mid-game (for example a re-deal ran out of cards).
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for engine commands.
pub type CommandResult<T> = Result<T, GameError>;
