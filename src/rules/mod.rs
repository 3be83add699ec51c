//! Rules engine: turn and day state machine, wrap payouts and scoring.
//!
//! A presentation layer reads `available_actions` (or `legal_commands`),
//! issues a command and renders the structured result. The engine never
//! interprets presentation concerns beyond handing back positions and icon
//! paths.

pub mod builder;
pub mod manager;
pub mod outcome;
pub mod scoring;
pub mod wrap;

pub use builder::GameBuilder;
pub use manager::GameManager;
pub use outcome::{
    ActOutcome, AvailableRole, CommandOutcome, Payout, SceneView, TakeView, Token, UpgradeOffer,
    WrapReport,
};
pub use scoring::{standings, winners, GameResult, Standing};
pub use wrap::distribute_bonus;
