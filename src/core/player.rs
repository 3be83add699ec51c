//! Players and their per-turn bookkeeping.
//!
//! ## PlayerId
//!
//! 0-based index into the game's player list. Turn order is index order.
//!
//! ## Player
//!
//! Everything the rules track per player: wallet, rank, held role,
//! practice chips, location, and the five once-per-turn flags.

use serde::{Deserialize, Serialize};

use super::geometry::Position;
use super::ids::{LocationId, RoleId};

/// Highest rank a player can reach.
pub const MAX_RANK: u8 = 6;

/// Token color codes, one per seat.
pub const PLAYER_COLORS: [&str; 8] = ["b", "c", "g", "o", "p", "r", "v", "y"];

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use deadwood::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat after this one, wrapping to the first.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Things a player may do at most once per turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFlags {
    pub moved: bool,
    pub acted: bool,
    pub rehearsed: bool,
    pub taken_role: bool,
    pub upgraded: bool,
}

impl TurnFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

/// One player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Token color code (see [`PLAYER_COLORS`]).
    pub color: String,
    /// 1..=6
    pub rank: u8,
    pub dollars: u32,
    pub credits: u32,
    /// Held role. Exclusive: no other player holds the same id.
    pub role: Option<RoleId>,
    /// Bonus added to acting rolls; stays below the scene budget minus one.
    pub practice_chips: u8,
    pub location: LocationId,
    pub flags: TurnFlags,
    /// Token position on the board image.
    pub position: Position,
}

impl Player {
    /// New player standing at `location` with the given starting wallet.
    #[must_use]
    pub fn new(id: PlayerId, rank: u8, dollars: u32, credits: u32, location: LocationId) -> Self {
        Self {
            id,
            name: format!("Player {}", id.index() + 1),
            color: PLAYER_COLORS[id.index() % PLAYER_COLORS.len()].to_string(),
            rank,
            dollars,
            credits,
            role: None,
            practice_chips: 0,
            location,
            flags: TurnFlags::default(),
            position: Position::default(),
        }
    }

    #[must_use]
    pub fn has_role(&self) -> bool {
        self.role.is_some()
    }

    /// Let go of any role and lose accumulated chips.
    pub fn release_role(&mut self) {
        self.role = None;
        self.practice_chips = 0;
    }

    /// dollars + credits + 5 per rank.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.dollars + self.credits + u32::from(self.rank) * 5
    }
}
