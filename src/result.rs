//! Turn and game result types.

use crate::dice::Roll;

/// Which rule applied to a played roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollEffect {
    /// Double ones under the eyes rule: the player's whole stack went to Ethan.
    EyesWipe {
        /// Chips the player lost.
        lost: u32,
    },
    /// A four: the player took everything Ethan held.
    BankPayout {
        /// Chips the player received.
        amount: u32,
    },
    /// Any other roll: the player paid one chip to Ethan.
    PaidBank,
}

/// Result of a single turn attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The current player had no chips and sat out.
    Skipped,
    /// The current player rolled.
    Played {
        /// Index of the player who rolled.
        player: usize,
        /// The dice.
        roll: Roll,
        /// The rule that applied.
        effect: RollEffect,
    },
}

impl TurnResult {
    /// Returns whether the turn was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// One player holds every chip.
    Win {
        /// Index of the winning player.
        player: usize,
    },
    /// No player holds any chips; Ethan has them all.
    Lose,
}
