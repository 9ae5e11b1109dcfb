//! Game configuration options.

use crate::error::ValidationError;

/// Largest number of players a game accepts.
pub const MAX_PLAYERS: usize = 50;

/// Largest number of chips each player may start with.
pub const MAX_STARTING_CHIPS: u32 = 1000;

/// Configuration options for a game of Ethan.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ethan::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_starting_chips(10)
///     .with_eyes_rule(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Chips each player starts with.
    pub starting_chips: u32,
    /// Number of players, not counting Ethan.
    pub players: usize,
    /// Whether rolling double ones sends the player's whole stack to Ethan.
    pub eyes_rule: bool,
    /// Whether turns run without waiting for confirmation.
    pub auto_play: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: 5,
            players: 5,
            eyes_rule: false,
            auto_play: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of chips each player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use ethan::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(20);
    /// assert_eq!(options.starting_chips, 20);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u32) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use ethan::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(2);
    /// assert_eq!(options.players, 2);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets whether the eyes rule is in play.
    #[must_use]
    pub const fn with_eyes_rule(mut self, enabled: bool) -> Self {
        self.eyes_rule = enabled;
        self
    }

    /// Sets whether turns advance without confirmation.
    #[must_use]
    pub const fn with_auto_play(mut self, enabled: bool) -> Self {
        self.auto_play = enabled;
        self
    }

    /// Total chips in play: every player's starting stack combined.
    #[must_use]
    pub const fn total_chips(&self) -> u32 {
        self.starting_chips.saturating_mul(self.players as u32)
    }

    /// Checks the player and chip bounds.
    ///
    /// # Errors
    ///
    /// Returns the first bound that is violated, checking the player count
    /// before the starting chips.
    ///
    /// ```
    /// use ethan::{GameOptions, ValidationError};
    ///
    /// let options = GameOptions::default().with_players(0);
    /// assert_eq!(options.validate(), Err(ValidationError::TooFewPlayers));
    /// ```
    pub const fn validate(&self) -> Result<(), ValidationError> {
        if self.players < 1 {
            return Err(ValidationError::TooFewPlayers);
        }
        if self.players > MAX_PLAYERS {
            return Err(ValidationError::TooManyPlayers { max: MAX_PLAYERS });
        }
        if self.starting_chips < 1 {
            return Err(ValidationError::TooFewChips);
        }
        if self.starting_chips > MAX_STARTING_CHIPS {
            return Err(ValidationError::TooManyChips {
                max: MAX_STARTING_CHIPS,
            });
        }
        Ok(())
    }
}
