//! Structured results and read-only views returned by the engine.

use serde::{Deserialize, Serialize};

use crate::board::Take;
use crate::core::config::Currency;
use crate::core::dice::WrapRoll;
use crate::core::geometry::{Area, Position};
use crate::core::ids::{LocationId, RoleId};
use crate::core::player::PlayerId;

/// Money paid to one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub dollars: u32,
    pub credits: u32,
}

/// What a wrapped scene paid out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapReport {
    pub set: LocationId,
    /// Bonus dice, highest first. Empty when nobody was on the card.
    pub dice: WrapRoll,
    /// Dollars per role holder, in player order. Includes zero payouts.
    pub payouts: Vec<(PlayerId, u32)>,
}

/// Result of one `act`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActOutcome {
    pub success: bool,
    /// The die face.
    pub roll: u8,
    /// Die plus practice chips.
    pub total: u8,
    /// Paid to the actor for this shot.
    pub payout: Payout,
    /// Wrap bonus dice were rolled.
    pub bonus_awarded: bool,
    pub day_ended: bool,
    pub game_ended: bool,
    /// Present when this shot wrapped the scene.
    pub wrap: Option<WrapReport>,
}

/// Result of any command dispatched through `apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Moved { to: LocationId },
    RoleTaken { role: RoleId },
    Rehearsed { chips: u8 },
    Acted(ActOutcome),
    Upgraded { rank: u8 },
    TurnEnded { next: PlayerId },
}

/// A role the current player could take.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableRole {
    pub id: RoleId,
    pub name: String,
    pub rank: u8,
    pub on_card: bool,
    pub line: String,
}

/// One upgrade tier above the current player's rank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeOffer {
    pub rank: u8,
    pub currency: Currency,
    pub price: u32,
    pub affordable: bool,
}

/// A set's current card as the board should show it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneView {
    pub set: LocationId,
    pub name: String,
    pub number: u32,
    pub budget: u8,
    pub wrapped: bool,
    /// Card face, or the card back once wrapped.
    pub image: String,
    pub area: Area,
}

/// Remaining shot markers on one set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeView {
    pub set: LocationId,
    pub takes: Vec<Take>,
}

/// A player's token on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub player: PlayerId,
    /// `{prefix}{color}{rank}.png`
    pub icon: String,
    pub position: Position,
}
