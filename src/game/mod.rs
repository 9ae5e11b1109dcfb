//! Game engine and turn loop.

use core::fmt;

use crate::dice::{ChaChaDice, RandomSource};
use crate::error::{RunError, SerializationError, ValidationError};
use crate::io::{OutputSink, StdinGate, TracingSink, TurnGate};
use crate::options::GameOptions;
use crate::result::Outcome;

pub mod state;
mod task;
mod turn;

pub use state::GameState;
pub use task::GameTask;

/// A game of Ethan: the state plus the dice, output, and turn gate it runs
/// against.
///
/// The game is built from [`GameOptions`] and a seed. Collaborators can be
/// swapped with the `with_*` methods before the game starts.
pub struct Game {
    /// Current game state.
    pub state: GameState,
    dice: Box<dyn RandomSource + Send>,
    sink: Box<dyn OutputSink + Send>,
    gate: Option<Box<dyn TurnGate + Send>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("gate", &self.gate.is_some())
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a new game with dice seeded from `seed`.
    ///
    /// Output goes to `tracing`. Unless autoplay is on, each played turn waits
    /// for a line on standard input.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use ethan::{Game, GameOptions};
    ///
    /// let options = GameOptions::default().with_auto_play(true);
    /// let game = Game::new(options, 42).unwrap();
    /// assert_eq!(game.state.players, vec![5; 5]);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ValidationError> {
        let state = GameState::new(&options)?;
        let gate: Option<Box<dyn TurnGate + Send>> = if options.auto_play {
            None
        } else {
            Some(Box::new(StdinGate))
        };

        Ok(Self {
            state,
            dice: Box::new(ChaChaDice::new(seed)),
            sink: Box::new(TracingSink),
            gate,
        })
    }

    /// Replaces the dice.
    #[must_use]
    pub fn with_dice(mut self, dice: impl RandomSource + Send + 'static) -> Self {
        self.dice = Box::new(dice);
        self
    }

    /// Replaces the output sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl OutputSink + Send + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replaces the turn gate. Ignored when autoplay is on.
    #[must_use]
    pub fn with_gate(mut self, gate: impl TurnGate + Send + 'static) -> Self {
        self.gate = Some(Box::new(gate));
        self
    }

    fn emit(&mut self, line: &str) {
        self.sink.emit(line);
    }

    /// Plays turns until somebody wins or everybody loses.
    ///
    /// At least one turn is always attempted, and the end of the game is only
    /// checked after a turn that was actually played.
    ///
    /// # Errors
    ///
    /// Returns an error if waiting on the turn gate fails.
    pub fn run(&mut self) -> Result<Outcome, RunError> {
        loop {
            let turn = self.execute_turn()?;
            if !turn.is_skipped() {
                if self.check_win() {
                    return Ok(Outcome::Win {
                        player: self.state.current_player,
                    });
                }
                if self.check_lose() {
                    return Ok(Outcome::Lose);
                }
            }
            self.state.advance(turn.is_skipped());
        }
    }

    /// Returns whether the current player holds every chip, announcing the
    /// winner if so.
    pub fn check_win(&mut self) -> bool {
        if !self.state.is_won() {
            return false;
        }
        let player = self.state.current_player;
        self.emit(&format!(
            "player {player} has all of the chips! player {player} wins!"
        ));
        true
    }

    /// Returns whether every player is out of chips, announcing the loss if so.
    pub fn check_lose(&mut self) -> bool {
        if !self.state.is_lost() {
            return false;
        }
        self.emit("no Players have any chips left, Ethan wins, everybody loses, gg");
        true
    }

    /// Sends the full final state to the output sink as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be serialized.
    pub fn print_final_summary(&mut self) -> Result<(), SerializationError> {
        let json = self.state.summary_json()?;
        self.emit(&format!("final state \n{json}"));
        Ok(())
    }
}
