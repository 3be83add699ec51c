//! The board: location graph, deck and open-scene counter.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::location::{Location, LocationKind, SetState, Take};
use crate::cards::{Deck, Role};
use crate::core::config::{check_rank, BoardConfig, LocationKindConfig, Upgrade};
use crate::core::error::ConfigError;
use crate::core::ids::{LocationId, RoleId};

/// The game board.
///
/// Built once per game by [`Board::new`], which validates the topology and
/// deals the first day's cards. There is no way to re-initialize it.
#[derive(Clone, Debug)]
pub struct Board {
    name: String,
    locations: Vec<Location>,
    by_name: FxHashMap<String, LocationId>,
    trailer: LocationId,
    casting_office: LocationId,
    /// Scenes not yet wrapped today, in `1..=total_sets`.
    open_scenes: usize,
    total_sets: usize,
    deck: Deck,
}

impl Board {
    /// Validate `config` and deal one card to every set.
    pub fn new(config: &BoardConfig, deck: Deck) -> Result<Self, ConfigError> {
        let mut by_name: FxHashMap<String, LocationId> = FxHashMap::default();
        for (i, loc) in config.locations.iter().enumerate() {
            let id = LocationId::new(u16::try_from(i).map_err(|_| {
                ConfigError::Parse(format!("too many locations ({})", config.locations.len()))
            })?);
            if by_name.insert(loc.name.clone(), id).is_some() {
                return Err(ConfigError::DuplicateLocation(loc.name.clone()));
            }
        }

        let mut locations = Vec::with_capacity(config.locations.len());
        let mut trailers = Vec::new();
        let mut offices = Vec::new();

        for (i, loc) in config.locations.iter().enumerate() {
            let id = LocationId::new(i as u16);

            let mut neighbors = Vec::with_capacity(loc.neighbors.len());
            let mut seen = FxHashSet::default();
            for neighbor in &loc.neighbors {
                let &nid = by_name.get(neighbor).ok_or_else(|| ConfigError::UnknownNeighbor {
                    location: loc.name.clone(),
                    neighbor: neighbor.clone(),
                })?;
                let back = &config.locations[nid.index()];
                if !back.neighbors.iter().any(|n| n == &loc.name) {
                    return Err(ConfigError::AsymmetricNeighbor {
                        from: loc.name.clone(),
                        to: neighbor.clone(),
                    });
                }
                if seen.insert(nid) {
                    neighbors.push(nid);
                }
            }

            let kind = match &loc.kind {
                LocationKindConfig::Set { takes, roles } => {
                    if takes.is_empty() {
                        return Err(ConfigError::NoTakes(loc.name.clone()));
                    }
                    for role in roles {
                        check_rank(format!("role {} at {}", role.name, loc.name), role.rank, 1)?;
                    }
                    let mut takes: Vec<Take> = takes
                        .iter()
                        .map(|t| Take {
                            number: t.number,
                            area: t.area,
                        })
                        .collect();
                    takes.sort_by_key(|t| t.number);
                    let roles = roles.iter().map(|r| Role::from_config(r, false)).collect();
                    LocationKind::Set(SetState::new(takes, roles))
                }
                LocationKindConfig::Trailer => {
                    trailers.push(id);
                    LocationKind::Trailer
                }
                LocationKindConfig::CastingOffice { upgrades } => {
                    for upgrade in upgrades {
                        check_rank(
                            format!("{} upgrade at {}", upgrade.currency, loc.name),
                            upgrade.rank,
                            2,
                        )?;
                    }
                    offices.push(id);
                    LocationKind::CastingOffice {
                        upgrades: upgrades.clone(),
                    }
                }
            };

            locations.push(Location {
                id,
                name: loc.name.clone(),
                neighbors,
                area: loc.area,
                layout: loc.layout,
                kind,
            });
        }

        let trailer = match trailers.as_slice() {
            [only] => *only,
            _ => return Err(ConfigError::TrailerCount(trailers.len())),
        };
        let casting_office = match offices.as_slice() {
            [only] => *only,
            _ => return Err(ConfigError::CastingOfficeCount(offices.len())),
        };

        let total_sets = locations.iter().filter(|l| l.is_set()).count();
        if total_sets < 2 {
            return Err(ConfigError::TooFewSets(total_sets));
        }

        let mut board = Self {
            name: config.name.clone(),
            locations,
            by_name,
            trailer,
            casting_office,
            open_scenes: total_sets,
            total_sets,
            deck,
        };
        board.deal_cards()?;
        Ok(board)
    }

    /// Give every set the next card from the deck.
    pub fn deal_cards(&mut self) -> Result<(), ConfigError> {
        for loc in &mut self.locations {
            if !loc.is_set() {
                continue;
            }
            let card = self.deck.draw_scene()?;
            debug!(set = %loc.name, scene = %card.name, "dealt scene");
            if let Some(set) = loc.as_set_mut() {
                set.deal(card);
            }
        }
        Ok(())
    }

    /// The day is over once a single scene is left open.
    #[must_use]
    pub fn check_end_day(&self) -> bool {
        self.open_scenes == 1
    }

    /// Record one wrapped scene.
    pub(crate) fn close_scene(&mut self) {
        debug_assert!(self.open_scenes > 1, "closing a scene on a finished day");
        self.open_scenes = self.open_scenes.saturating_sub(1).max(1);
    }

    /// Reset roles and takes, reopen every scene and deal fresh cards.
    pub(crate) fn start_new_day(&mut self) -> Result<(), ConfigError> {
        for loc in &mut self.locations {
            if let Some(set) = loc.as_set_mut() {
                set.reset_roles();
            }
        }
        self.open_scenes = self.total_sets;
        self.deal_cards()?;
        for loc in &mut self.locations {
            if let Some(set) = loc.as_set_mut() {
                set.reset_takes();
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location by id. Ids come from this board, so a miss is a bug.
    #[must_use]
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    #[must_use]
    pub fn location_by_name(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    /// The neighbor of `from` called `name`, if there is one.
    #[must_use]
    pub fn neighbor(&self, from: LocationId, name: &str) -> Option<LocationId> {
        self.location(from)
            .neighbors
            .iter()
            .copied()
            .find(|&n| self.location(n).name == name)
    }

    #[must_use]
    pub fn trailer(&self) -> LocationId {
        self.trailer
    }

    #[must_use]
    pub fn casting_office(&self) -> LocationId {
        self.casting_office
    }

    #[must_use]
    pub fn open_scenes(&self) -> usize {
        self.open_scenes
    }

    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.total_sets
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn set(&self, id: LocationId) -> Option<&SetState> {
        self.locations.get(id.index())?.as_set()
    }

    pub(crate) fn set_mut(&mut self, id: LocationId) -> Option<&mut SetState> {
        self.locations.get_mut(id.index())?.as_set_mut()
    }

    /// All sets in board order.
    pub fn sets(&self) -> impl Iterator<Item = (&Location, &SetState)> + '_ {
        self.locations
            .iter()
            .filter_map(|l| l.as_set().map(|s| (l, s)))
    }

    #[must_use]
    pub fn role(&self, id: RoleId) -> Option<&Role> {
        self.set(id.location)?.role(id.slot)
    }

    pub(crate) fn role_mut(&mut self, id: RoleId) -> Option<&mut Role> {
        self.set_mut(id.location)?.role_mut(id.slot)
    }

    /// Upgrade catalog of the casting office.
    #[must_use]
    pub fn upgrades(&self) -> &[Upgrade] {
        self.location(self.casting_office).upgrades()
    }
}
