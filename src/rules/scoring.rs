//! End-of-game scoring.

use serde::{Deserialize, Serialize};

use crate::core::player::{Player, PlayerId};

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players share the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// One line of the final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: u32,
}

/// Players ranked by score, highest first. Ties keep seating order.
///
/// ```
/// use deadwood::core::{LocationId, Player, PlayerId};
/// use deadwood::rules::standings;
///
/// let trailer = LocationId::new(0);
/// let players = vec![
///     Player::new(PlayerId::new(0), 1, 10, 0, trailer),
///     Player::new(PlayerId::new(1), 3, 0, 10, trailer),
/// ];
/// let ranking = standings(&players);
/// assert_eq!(ranking[0].score, 25);
/// assert_eq!(ranking[1].score, 15);
/// ```
#[must_use]
pub fn standings(players: &[Player]) -> Vec<Standing> {
    let mut ranking: Vec<Standing> = players
        .iter()
        .map(|p| Standing {
            player: p.id,
            name: p.name.clone(),
            score: p.score(),
        })
        .collect();
    ranking.sort_by(|a, b| b.score.cmp(&a.score));
    ranking
}

/// Everyone holding the top score. `None` only for an empty table.
#[must_use]
pub fn winners(players: &[Player]) -> Option<GameResult> {
    let top = players.iter().map(Player::score).max()?;
    let mut best: Vec<PlayerId> = players
        .iter()
        .filter(|p| p.score() == top)
        .map(|p| p.id)
        .collect();
    Some(if best.len() == 1 {
        GameResult::Winner(best.remove(0))
    } else {
        GameResult::Winners(best)
    })
}
