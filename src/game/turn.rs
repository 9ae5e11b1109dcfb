use crate::error::RunError;
use crate::result::{RollEffect, TurnResult};

use super::Game;

impl Game {
    /// Plays the current player's turn.
    ///
    /// A player with no chips sits out: nothing is rolled, printed, or
    /// changed, and the turn comes back as [`TurnResult::Skipped`]. Otherwise
    /// the dice are rolled, the outcome is applied, and every balance is
    /// printed.
    ///
    /// This does not advance to the next player.
    ///
    /// # Errors
    ///
    /// Returns an error if waiting on the turn gate fails.
    pub fn execute_turn(&mut self) -> Result<TurnResult, RunError> {
        let player = self.state.current_player;
        if self.state.current_balance() == 0 {
            tracing::debug!(player, "player has no chips, skipping");
            return Ok(TurnResult::Skipped);
        }

        self.emit(&format!("Turn {}, player {player}", self.state.turn_count));
        if !self.state.auto_play {
            if let Some(gate) = self.gate.as_mut() {
                self.sink.emit("hit enter to execute turn");
                gate.wait()?;
            }
        }

        let roll = self.dice.roll();
        self.emit(&format!("die 1: {} -- die 2: {}", roll.first, roll.second));

        let bank_before = self.state.bank;
        let Some(effect) = self.state.apply_roll(roll) else {
            return Ok(TurnResult::Skipped);
        };
        tracing::debug!(player, ?roll, ?effect, "applied roll");
        let message = match effect {
            RollEffect::EyesWipe { .. } => {
                format!("Ethan eyes, player {player} loses it all")
            }
            RollEffect::BankPayout { amount } => {
                format!("rolled a 4, player {player} gets all of Ethan's current chips, {amount}")
            }
            RollEffect::PaidBank => format!(
                "rolled {}, player {player} gives a chip to Ethan who now has {}",
                roll.sum(),
                bank_before
            ),
        };
        self.emit(&message);
        self.print_balances();

        Ok(TurnResult::Played {
            player,
            roll,
            effect,
        })
    }

    fn print_balances(&mut self) {
        let mut lines = Vec::with_capacity(self.state.players.len() + 1);
        lines.push(format!("Ethan has {}", self.state.bank));
        lines.extend(
            self.state
                .players
                .iter()
                .enumerate()
                .map(|(index, chips)| format!("player {index} has {chips}")),
        );
        for line in &lines {
            self.emit(line);
        }
    }
}
