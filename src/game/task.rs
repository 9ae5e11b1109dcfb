use std::thread::{self, JoinHandle};

use crate::error::RunError;
use crate::result::Outcome;

use super::Game;

/// A game running on its own worker thread.
///
/// Created by [`Game::spawn`]. The worker owns the game until it finishes;
/// [`GameTask::join`] hands it back together with the outcome.
#[derive(Debug)]
pub struct GameTask {
    handle: JoinHandle<(Game, Result<Outcome, RunError>)>,
}

impl GameTask {
    /// Blocks until the game ends.
    ///
    /// # Errors
    ///
    /// Returns the error the turn loop stopped with, or
    /// [`RunError::WorkerPanicked`] if the worker thread panicked.
    pub fn join(self) -> Result<(Game, Outcome), RunError> {
        let (game, result) = self.handle.join().map_err(|_| RunError::WorkerPanicked)?;
        result.map(|outcome| (game, outcome))
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Game {
    /// Moves the game to a worker thread and starts [`Game::run`] there.
    ///
    /// ```
    /// use ethan::{Game, GameOptions, MemorySink, Outcome, Roll, ScriptedDice};
    ///
    /// let options = GameOptions::default().with_players(1).with_auto_play(true);
    /// let game = Game::new(options, 3)
    ///     .unwrap()
    ///     .with_dice(ScriptedDice::repeat(Roll::new(1, 2)))
    ///     .with_sink(MemorySink::new());
    /// let (game, outcome) = game.spawn().join().unwrap();
    /// assert_eq!(outcome, Outcome::Lose);
    /// assert_eq!(game.state.bank, 5);
    /// ```
    #[must_use]
    pub fn spawn(mut self) -> GameTask {
        let handle = thread::spawn(move || {
            let result = self.run();
            (self, result)
        });
        GameTask { handle }
    }
}
