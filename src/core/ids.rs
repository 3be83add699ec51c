//! Stable identifiers for board entities.
//!
//! Locations are stored in a `Vec` on the board and addressed by index.
//! Roles are addressed by the set they belong to plus a slot: on-card slots
//! index the current scene card's roles, off-card slots index the set's own
//! roles. A held `RoleId` stays valid until the scene wraps or the day
//! resets, which is also when every player lets go of it.

use serde::{Deserialize, Serialize};

/// Index of a location on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub u16);

impl LocationId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

/// Which list a role lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleSlot {
    /// Index into the current scene card's roles.
    OnCard(u8),
    /// Index into the set's permanent roles.
    OffCard(u8),
}

impl RoleSlot {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            RoleSlot::OnCard(i) | RoleSlot::OffCard(i) => i as usize,
        }
    }
}

/// A role on a specific set.
///
/// ```
/// use deadwood::core::{LocationId, RoleId, RoleSlot};
///
/// let lead = RoleId::on_card(LocationId::new(3), 0);
/// assert!(lead.is_on_card());
/// assert_eq!(lead.slot, RoleSlot::OnCard(0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId {
    /// Set hosting the role.
    pub location: LocationId,
    /// Slot within the set.
    pub slot: RoleSlot,
}

impl RoleId {
    #[must_use]
    pub const fn on_card(location: LocationId, index: u8) -> Self {
        Self {
            location,
            slot: RoleSlot::OnCard(index),
        }
    }

    #[must_use]
    pub const fn off_card(location: LocationId, index: u8) -> Self {
        Self {
            location,
            slot: RoleSlot::OffCard(index),
        }
    }

    #[must_use]
    pub const fn is_on_card(self) -> bool {
        matches!(self.slot, RoleSlot::OnCard(_))
    }
}
