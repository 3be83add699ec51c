//! Random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Entropy by default**: `GameRng::from_entropy()` draws a seed from the
//!   OS and remembers it, so a game can be replayed from its log line
//! - **Context streams**: Deck shuffling and dice use independent sequences
//!
//! ```
//! use deadwood::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut deck_rng = rng.for_context("deck");
//! let mut dice_rng = rng.for_context("dice");
//!
//! // Same parent, same context => same stream
//! let mut again = GameRng::new(42).for_context("deck");
//! assert_eq!(deck_rng.roll_range(1..=6), again.roll_range(1..=6));
//! # let _ = dice_rng.roll_range(1..=6);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Anything that can roll a die.
///
/// The engine owns exactly one of these through [`Dice`](super::Dice).
/// Production uses [`GameRng`]; tests that need specific rolls use
/// [`ScriptedDice`].
pub trait DieSource: std::fmt::Debug {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u8) -> u8;
}

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the process entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform integer in the inclusive range.
    pub fn roll_range(&mut self, range: std::ops::RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place with a uniform permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

impl DieSource for GameRng {
    fn roll(&mut self, sides: u8) -> u8 {
        self.roll_range(1..=sides)
    }
}

/// Die source that replays a fixed sequence, cycling when it runs out.
///
/// ```
/// use deadwood::core::{DieSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new(vec![6, 1]);
/// assert_eq!(dice.roll(6), 6);
/// assert_eq!(dice.roll(6), 1);
/// assert_eq!(dice.roll(6), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Panics if `rolls` is empty.
    pub fn new(rolls: impl Into<Vec<u8>>) -> Self {
        let rolls = rolls.into();
        assert!(!rolls.is_empty(), "ScriptedDice needs at least one roll");
        Self { rolls, cursor: 0 }
    }

    /// Number of rolls handed out so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.cursor
    }
}

impl DieSource for ScriptedDice {
    fn roll(&mut self, sides: u8) -> u8 {
        let value = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        value.clamp(1, sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(6), rng2.roll(6));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll(6)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll(6)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let v = rng.roll(6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let mut deck = rng.for_context("deck");
        let mut dice = rng.for_context("dice");

        let seq1: Vec<_> = (0..20).map(|_| deck.roll(6)).collect();
        let seq2: Vec<_> = (0..20).map(|_| dice.roll(6)).collect();
        assert_ne!(seq1, seq2);

        let mut deck_again = GameRng::new(42).for_context("deck");
        let seq3: Vec<_> = (0..20).map(|_| deck_again.roll(6)).collect();
        assert_eq!(seq1, seq3);
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        let mut a = rng.clone();
        let mut b = GameRng::new(rng.seed());
        assert_eq!(a.roll(6), b.roll(6));
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=20).collect();
        let original = data.clone();

        rng.shuffle(&mut data);
        assert_ne!(data, original);

        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_scripted_cycles_and_clamps() {
        let mut dice = ScriptedDice::new(vec![3, 9, 0]);
        assert_eq!(dice.roll(6), 3);
        assert_eq!(dice.roll(6), 6);
        assert_eq!(dice.roll(6), 1);
        assert_eq!(dice.roll(6), 3);
        assert_eq!(dice.rolled(), 4);
    }

    #[test]
    #[should_panic(expected = "at least one roll")]
    fn test_scripted_empty() {
        let _ = ScriptedDice::new(Vec::<u8>::new());
    }
}
