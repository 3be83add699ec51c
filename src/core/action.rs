//! Actions and commands.
//!
//! An [`ActionKind`] is the verb the presentation layer offers as a button.
//! A [`Command`] is the verb plus whatever noun it needs (destination, role
//! name, upgrade tier). Accepted commands are kept as [`ActionRecord`]s.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::Currency;
use super::player::PlayerId;

/// The six things a player can do on a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Move,
    TakeRole,
    Rehearse,
    Act,
    Upgrade,
    EndTurn,
}

impl ActionKind {
    /// Every kind, in the order `available_actions` reports them.
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Move,
        ActionKind::TakeRole,
        ActionKind::Act,
        ActionKind::Rehearse,
        ActionKind::Upgrade,
        ActionKind::EndTurn,
    ];
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Move => "Move",
            ActionKind::TakeRole => "Take Role",
            ActionKind::Rehearse => "Rehearse",
            ActionKind::Act => "Act",
            ActionKind::Upgrade => "Upgrade",
            ActionKind::EndTurn => "End Turn",
        };
        f.write_str(name)
    }
}

/// Set of currently available actions.
///
/// Never more than six entries, so it lives inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    kinds: SmallVec<[ActionKind; 6]>,
}

impl ActionSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a kind. Duplicates are ignored.
    pub fn insert(&mut self, kind: ActionKind) {
        if !self.contains(kind) {
            self.kinds.push(kind);
        }
    }

    #[must_use]
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.kinds.contains(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl FromIterator<ActionKind> for ActionSet {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> Self {
        let mut set = Self::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

/// A fully specified command.
///
/// ```
/// use deadwood::core::{ActionKind, Command, Currency};
///
/// let cmd = Command::Upgrade { rank: 3, currency: Currency::Dollars };
/// assert_eq!(cmd.kind(), ActionKind::Upgrade);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move to the named neighbor.
    Move { to: String },
    /// Take the named role on the current set.
    TakeRole { role: String },
    Rehearse,
    Act,
    /// Buy the tier of `rank` paying in `currency`.
    Upgrade { rank: u8, currency: Currency },
    EndTurn,
}

impl Command {
    /// The action kind this command exercises.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Command::Move { .. } => ActionKind::Move,
            Command::TakeRole { .. } => ActionKind::TakeRole,
            Command::Rehearse => ActionKind::Rehearse,
            Command::Act => ActionKind::Act,
            Command::Upgrade { .. } => ActionKind::Upgrade,
            Command::EndTurn => ActionKind::EndTurn,
        }
    }
}

/// An accepted command with the context it ran in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who issued it.
    pub player: PlayerId,

    /// What was done.
    pub command: Command,

    /// Day number, starting at 1.
    pub day: u8,

    /// Turn number, starting at 1 and counting every `EndTurn`.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}
