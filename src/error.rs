//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer than one player.
    #[error("number of players cannot be less than 1")]
    TooFewPlayers,
    /// More players than the table allows.
    #[error("number of players cannot exceed {max}")]
    TooManyPlayers {
        /// Largest accepted player count.
        max: usize,
    },
    /// Fewer than one starting chip.
    #[error("cannot have fewer than 1 starting chip")]
    TooFewChips,
    /// More starting chips than allowed.
    #[error("cannot have more than {max} starting chips")]
    TooManyChips {
        /// Largest accepted starting chip count.
        max: u32,
    },
}

/// Errors that can occur while the turn loop is running.
#[derive(Debug, Error)]
pub enum RunError {
    /// Waiting on the turn gate failed.
    #[error("turn confirmation failed: {0}")]
    Gate(#[from] std::io::Error),
    /// The background worker running the game panicked.
    #[error("game worker panicked")]
    WorkerPanicked,
}

/// Errors that can occur while serializing the final game state.
#[derive(Debug, Error)]
#[error("failed to serialize game state: {0}")]
pub struct SerializationError(#[from] serde_json::Error);
