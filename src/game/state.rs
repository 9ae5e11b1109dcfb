//! Game state and the roll outcome policy.

use serde::Serialize;

use crate::dice::Roll;
use crate::error::{SerializationError, ValidationError};
use crate::options::GameOptions;
use crate::result::RollEffect;

/// Snake eyes: both dice showing one.
const EYES_SUM: u8 = 2;
/// The only roll that pays out of Ethan's pile.
const PAYOUT_SUM: u8 = 4;

/// Chip balances, turn position, and the rules in force.
///
/// Field names in the serialized form match the summary printed at the end of
/// a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameState {
    /// Chips held by Ethan, the bank.
    #[serde(rename = "Ethan")]
    pub bank: u32,
    /// Chips held by each player, indexed by player.
    pub players: Vec<u32>,
    /// Whether double ones wipe out the rolling player.
    #[serde(rename = "EthanEyes")]
    pub eyes_rule: bool,
    /// Whether turns advance without confirmation.
    pub auto_play: bool,
    /// Index of the player whose turn it is.
    pub current_player: usize,
    /// Number of the turn being played, starting at 1.
    pub turn_count: u32,
    /// Chips each player started with.
    pub starting_chips: u32,
}

impl GameState {
    /// Creates the opening state: every player holds `starting_chips` and
    /// Ethan holds nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are out of bounds.
    ///
    /// ```
    /// use ethan::{GameOptions, GameState};
    ///
    /// let state = GameState::new(&GameOptions::default().with_players(2)).unwrap();
    /// assert_eq!(state.players, vec![5, 5]);
    /// assert_eq!(state.bank, 0);
    /// assert_eq!(state.turn_count, 1);
    /// ```
    pub fn new(options: &GameOptions) -> Result<Self, ValidationError> {
        options.validate()?;

        Ok(Self {
            bank: 0,
            players: vec![options.starting_chips; options.players],
            eyes_rule: options.eyes_rule,
            auto_play: options.auto_play,
            current_player: 0,
            turn_count: 1,
            starting_chips: options.starting_chips,
        })
    }

    /// Total chips the game started with. Conserved by every turn.
    #[must_use]
    pub fn total_chips(&self) -> u32 {
        self.starting_chips * self.players.len() as u32
    }

    /// Chips currently held by Ethan and all players together.
    #[must_use]
    pub fn chips_in_play(&self) -> u32 {
        self.bank + self.players.iter().sum::<u32>()
    }

    /// Chips held by the current player.
    #[must_use]
    pub fn current_balance(&self) -> u32 {
        self.players[self.current_player]
    }

    /// Applies a roll for the current player and reports which rule fired.
    ///
    /// The rules are checked in order and the first match wins:
    /// double ones under the eyes rule, then a sum of four, then everything
    /// else.
    ///
    /// A player with no chips sits out: the state is left untouched and
    /// `None` is returned.
    #[must_use]
    pub fn apply_roll(&mut self, roll: Roll) -> Option<RollEffect> {
        let player = &mut self.players[self.current_player];
        if *player == 0 {
            return None;
        }

        let effect = if self.eyes_rule && roll.sum() == EYES_SUM {
            let lost = *player;
            self.bank += lost;
            *player = 0;
            RollEffect::EyesWipe { lost }
        } else if roll.sum() == PAYOUT_SUM {
            let amount = self.bank;
            *player += amount;
            self.bank = 0;
            RollEffect::BankPayout { amount }
        } else {
            *player -= 1;
            self.bank += 1;
            RollEffect::PaidBank
        };
        Some(effect)
    }

    /// Returns whether the current player holds every chip in the game.
    ///
    /// Only the current player is looked at. A player who collected
    /// everything on an earlier turn wins once their turn comes around again.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.current_balance() == self.total_chips()
    }

    /// Returns whether every player is out of chips.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.players.iter().all(|&chips| chips == 0)
    }

    /// Moves to the next seat. The turn counter only moves on played turns.
    pub fn advance(&mut self, skipped: bool) {
        self.current_player = (self.current_player + 1) % self.players.len();
        if !skipped {
            self.turn_count += 1;
        }
    }

    /// Serializes the state as JSON indented by three spaces.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn summary_json(&self) -> Result<String, SerializationError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"   ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
