//! A turn-based dice game where players roll against the bank, Ethan.
//!
//! Each player starts with the same stack of chips. On their turn a player
//! rolls two dice: a four takes everything Ethan holds, any other roll pays one
//! chip to Ethan, and with the eyes rule on, double ones hand Ethan the
//! player's whole stack. The game ends when one player holds every chip or no
//! player holds any.
//!
//! The [`Game`] type owns the state and the turn loop. Dice, output, and the
//! manual turn confirmation are injected through [`RandomSource`],
//! [`OutputSink`], and [`TurnGate`].
//!
//! # Example
//!
//! ```
//! use ethan::{Game, GameOptions, MemorySink};
//!
//! let options = GameOptions::default().with_auto_play(true);
//! let sink = MemorySink::new();
//! let mut game = Game::new(options, 42).unwrap().with_sink(sink.clone());
//! let outcome = game.run().unwrap();
//! let _ = outcome;
//! assert_eq!(game.state.chips_in_play(), game.state.total_chips());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dice;
pub mod error;
pub mod game;
pub mod io;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use dice::{ChaChaDice, DIE_FACES, RandomSource, Roll, ScriptedDice};
pub use error::{RunError, SerializationError, ValidationError};
pub use game::{Game, GameState, GameTask};
pub use io::{LineGate, MemorySink, OutputSink, StdinGate, TracingSink, TurnGate};
pub use options::{GameOptions, MAX_PLAYERS, MAX_STARTING_CHIPS};
pub use result::{Outcome, RollEffect, TurnResult};
