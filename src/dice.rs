//! Dice and random sources.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// A roll of two dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll {
    /// The first die.
    pub first: u8,
    /// The second die.
    pub second: u8,
}

impl Roll {
    /// Creates a new roll.
    ///
    /// Note: This function does not validate the faces. Values outside
    /// 1..=6 are accepted and simply fall through to the default outcome.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Sum of both dice.
    #[must_use]
    pub const fn sum(&self) -> u8 {
        self.first.saturating_add(self.second)
    }
}

/// A source of dice rolls.
///
/// Every call produces two independent values in `1..=6`.
pub trait RandomSource {
    /// Rolls both dice.
    fn roll(&mut self) -> Roll;
}

/// Dice backed by a seeded ChaCha8 generator.
///
/// The same seed always produces the same sequence of rolls.
///
/// ```
/// use ethan::{ChaChaDice, RandomSource};
///
/// let mut a = ChaChaDice::new(7);
/// let mut b = ChaChaDice::new(7);
/// assert_eq!(a.roll(), b.roll());
/// ```
#[derive(Debug, Clone)]
pub struct ChaChaDice {
    rng: ChaCha8Rng,
}

impl ChaChaDice {
    /// Creates dice seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn die(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

impl RandomSource for ChaChaDice {
    fn roll(&mut self) -> Roll {
        let first = self.die();
        let second = self.die();
        Roll::new(first, second)
    }
}

/// Dice that replay a fixed script of rolls, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<Roll>,
    next: usize,
}

impl ScriptedDice {
    /// Creates dice that cycle through `rolls`.
    ///
    /// Returns `None` if the script is empty.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = Roll>) -> Option<Self> {
        let rolls: Vec<Roll> = rolls.into_iter().collect();
        if rolls.is_empty() {
            return None;
        }
        Some(Self { rolls, next: 0 })
    }

    /// Creates dice that always produce `roll`.
    #[must_use]
    pub fn repeat(roll: Roll) -> Self {
        Self {
            rolls: vec![roll],
            next: 0,
        }
    }
}

impl RandomSource for ScriptedDice {
    fn roll(&mut self) -> Roll {
        let roll = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}
