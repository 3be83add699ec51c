//! Six-sided dice for acting checks and wrap bonuses.

use smallvec::SmallVec;

use super::rng::DieSource;

/// Faces on every die in the game.
pub const DIE_SIDES: u8 = 6;

/// Wrap-bonus roll. Card budgets are capped at six, so this never spills.
pub type WrapRoll = SmallVec<[u8; 6]>;

/// The game's single dice cup.
#[derive(Debug)]
pub struct Dice {
    sides: u8,
    source: Box<dyn DieSource>,
}

impl Dice {
    /// Six-sided dice fed by `source`.
    pub fn new(source: Box<dyn DieSource>) -> Self {
        Self {
            sides: DIE_SIDES,
            source,
        }
    }

    /// One roll in `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.source.roll(self.sides)
    }

    /// Roll `budget` dice and sort them highest first.
    ///
    /// Highest-first order is what pairs the best die with the
    /// highest-ranked role during payout.
    pub fn wrap_roll(&mut self, budget: u8) -> WrapRoll {
        let mut rolls: WrapRoll = (0..budget).map(|_| self.roll_die()).collect();
        rolls.sort_unstable_by(|a, b| b.cmp(a));
        rolls
    }
}
