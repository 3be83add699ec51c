//! Locations and the per-set scene state.

use serde::{Deserialize, Serialize};

use crate::cards::{Role, SceneCard};
use crate::core::config::Upgrade;
use crate::core::geometry::{Area, TokenLayout};
use crate::core::ids::{LocationId, RoleSlot};

/// A shot marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Take {
    pub number: u8,
    pub area: Area,
}

/// Everything a set carries besides its place in the graph.
///
/// The take list is fixed. `remaining` counts down from its length on each
/// successful act; the markers still on the board are the first `remaining`
/// of the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetState {
    scene: Option<SceneCard>,
    takes: Vec<Take>,
    remaining: usize,
    roles: Vec<Role>,
}

impl SetState {
    pub(crate) fn new(takes: Vec<Take>, roles: Vec<Role>) -> Self {
        let remaining = takes.len();
        Self {
            scene: None,
            takes,
            remaining,
            roles,
        }
    }

    /// The card dealt to this set today.
    #[must_use]
    pub fn scene(&self) -> Option<&SceneCard> {
        self.scene.as_ref()
    }

    /// Replace the card. The old one is discarded.
    pub(crate) fn deal(&mut self, card: SceneCard) {
        self.scene = Some(card);
    }

    /// A set without a card counts as wrapped: nothing can be shot there.
    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        self.scene.as_ref().map_or(true, |s| s.wrapped)
    }

    /// Off-card roles.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Shot markers still in place.
    #[must_use]
    pub fn remaining_takes(&self) -> &[Take] {
        &self.takes[..self.remaining]
    }

    #[must_use]
    pub fn take_count(&self) -> usize {
        self.takes.len()
    }

    /// Consume one take. Returns true when this one wrapped the scene.
    ///
    /// ```
    /// use deadwood::board::{SetState, Take};
    /// use deadwood::core::Area;
    ///
    /// let mut set = SetState::with_takes(vec![Take { number: 1, area: Area::default() }]);
    /// assert!(set.decrement_takes());
    /// assert!(set.remaining_takes().is_empty());
    /// assert!(!set.decrement_takes());
    /// ```
    pub fn decrement_takes(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining > 0 {
            return false;
        }
        if let Some(scene) = self.scene.as_mut() {
            scene.wrapped = true;
        }
        true
    }

    /// Bare set with no roles. Handy for examples and tests.
    #[must_use]
    pub fn with_takes(takes: Vec<Take>) -> Self {
        Self::new(takes, Vec::new())
    }

    pub(crate) fn reset_takes(&mut self) {
        self.remaining = self.takes.len();
    }

    pub(crate) fn reset_roles(&mut self) {
        for role in &mut self.roles {
            role.taken = false;
        }
    }

    #[must_use]
    pub fn role(&self, slot: RoleSlot) -> Option<&Role> {
        match slot {
            RoleSlot::OnCard(i) => self.scene.as_ref()?.roles.get(usize::from(i)),
            RoleSlot::OffCard(i) => self.roles.get(usize::from(i)),
        }
    }

    pub(crate) fn role_mut(&mut self, slot: RoleSlot) -> Option<&mut Role> {
        match slot {
            RoleSlot::OnCard(i) => self.scene.as_mut()?.roles.get_mut(usize::from(i)),
            RoleSlot::OffCard(i) => self.roles.get_mut(usize::from(i)),
        }
    }

    /// Every role on the set, on-card first, with its slot.
    pub fn all_roles(&self) -> impl Iterator<Item = (RoleSlot, &Role)> + '_ {
        let on_card = self
            .scene
            .iter()
            .flat_map(|s| s.roles.iter().enumerate())
            .map(|(i, r)| (RoleSlot::OnCard(slot_index(i)), r));
        let off_card = self
            .roles
            .iter()
            .enumerate()
            .map(|(i, r)| (RoleSlot::OffCard(slot_index(i)), r));
        on_card.chain(off_card)
    }

    /// First untaken role called `name` that a player of `rank` can take.
    /// On-card roles shadow off-card roles with the same name.
    #[must_use]
    pub fn find_open_role(&self, name: &str, rank: u8) -> Option<RoleSlot> {
        if self.is_wrapped() {
            return None;
        }
        self.all_roles()
            .find(|(_, r)| r.name == name && r.is_open_to(rank))
            .map(|(slot, _)| slot)
    }
}

fn slot_index(i: usize) -> u8 {
    u8::try_from(i).unwrap_or(u8::MAX)
}

/// Variant-specific location state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    Set(SetState),
    Trailer,
    CastingOffice { upgrades: Vec<Upgrade> },
}

/// A node in the board graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// Fixed at construction; the relation is symmetric.
    pub neighbors: Vec<LocationId>,
    pub area: Area,
    pub layout: TokenLayout,
    pub kind: LocationKind,
}

impl Location {
    #[must_use]
    pub fn as_set(&self) -> Option<&SetState> {
        match &self.kind {
            LocationKind::Set(set) => Some(set),
            _ => None,
        }
    }

    pub(crate) fn as_set_mut(&mut self) -> Option<&mut SetState> {
        match &mut self.kind {
            LocationKind::Set(set) => Some(set),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(self.kind, LocationKind::Set(_))
    }

    #[must_use]
    pub fn is_casting_office(&self) -> bool {
        matches!(self.kind, LocationKind::CastingOffice { .. })
    }

    /// Upgrade catalog; empty anywhere but the casting office.
    #[must_use]
    pub fn upgrades(&self) -> &[Upgrade] {
        match &self.kind {
            LocationKind::CastingOffice { upgrades } => upgrades,
            _ => &[],
        }
    }

    #[must_use]
    pub fn is_adjacent(&self, other: LocationId) -> bool {
        self.neighbors.contains(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CardConfig, RoleConfig};

    fn takes(n: u8) -> Vec<Take> {
        (1..=n)
            .map(|number| Take {
                number,
                area: Area::default(),
            })
            .collect()
    }

    fn scene(roles: Vec<RoleConfig>) -> SceneCard {
        SceneCard::from_config(&CardConfig::new("Test Scene", 1, 3, roles)).unwrap()
    }

    fn saloon() -> SetState {
        let roles = vec![
            Role::from_config(&RoleConfig::new("Woman in Black Dress", 2), false),
            Role::from_config(&RoleConfig::new("Reluctant Farmer", 1), false),
        ];
        let mut set = SetState::new(takes(2), roles);
        set.deal(scene(vec![
            RoleConfig::new("Reluctant Farmer", 1),
            RoleConfig::new("Town Drunk", 4),
        ]));
        set
    }

    #[test]
    fn test_decrement_wraps_once() {
        let mut set = saloon();
        assert_eq!(set.remaining_takes().len(), 2);

        assert!(!set.decrement_takes());
        assert!(!set.is_wrapped());
        assert_eq!(set.remaining_takes()[0].number, 1);

        assert!(set.decrement_takes());
        assert!(set.is_wrapped());
        assert!(set.scene().unwrap().wrapped);

        assert!(!set.decrement_takes());
        assert!(set.remaining_takes().is_empty());
    }

    #[test]
    fn test_reset_takes() {
        let mut set = saloon();
        set.decrement_takes();
        set.decrement_takes();
        set.reset_takes();
        assert_eq!(set.remaining_takes().len(), 2);
    }

    #[test]
    fn test_on_card_shadows_off_card() {
        let set = saloon();
        assert_eq!(set.find_open_role("Reluctant Farmer", 1), Some(RoleSlot::OnCard(0)));
        assert_eq!(
            set.find_open_role("Woman in Black Dress", 2),
            Some(RoleSlot::OffCard(0))
        );
    }

    #[test]
    fn test_find_falls_back_when_taken() {
        let mut set = saloon();
        set.role_mut(RoleSlot::OnCard(0)).unwrap().taken = true;
        assert_eq!(set.find_open_role("Reluctant Farmer", 1), Some(RoleSlot::OffCard(1)));

        set.role_mut(RoleSlot::OffCard(1)).unwrap().taken = true;
        assert_eq!(set.find_open_role("Reluctant Farmer", 1), None);
    }

    #[test]
    fn test_find_respects_rank() {
        let set = saloon();
        assert_eq!(set.find_open_role("Town Drunk", 3), None);
        assert_eq!(set.find_open_role("Town Drunk", 4), Some(RoleSlot::OnCard(1)));
        assert_eq!(set.find_open_role("Nobody", 6), None);
    }

    #[test]
    fn test_no_roles_on_wrapped_set() {
        let mut set = saloon();
        set.decrement_takes();
        set.decrement_takes();
        assert_eq!(set.find_open_role("Reluctant Farmer", 6), None);
    }

    #[test]
    fn test_reset_roles_only_touches_off_card() {
        let mut set = saloon();
        set.role_mut(RoleSlot::OnCard(1)).unwrap().taken = true;
        set.role_mut(RoleSlot::OffCard(0)).unwrap().taken = true;
        set.reset_roles();

        assert!(!set.role(RoleSlot::OffCard(0)).unwrap().taken);
        assert!(set.role(RoleSlot::OnCard(1)).unwrap().taken);
    }

    #[test]
    fn test_unset_scene_is_wrapped() {
        let set = SetState::with_takes(takes(1));
        assert!(set.is_wrapped());
        assert!(set.role(RoleSlot::OnCard(0)).is_none());
    }
}
