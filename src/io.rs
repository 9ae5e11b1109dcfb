//! Output sinks and turn gates the engine talks to.

use std::io::{self, BufRead};
use std::sync::Arc;

use crate::sync::Mutex;

/// Receives every line of game output.
pub trait OutputSink {
    /// Emits one line.
    fn emit(&mut self, line: &str);
}

/// Emits each line as a `tracing` event at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn emit(&mut self, line: &str) {
        tracing::info!("{line}");
    }
}

/// Records lines in memory.
///
/// Clones share the same buffer, so a clone can be handed to a [`Game`]
/// while the original is kept for inspection.
///
/// ```
/// use ethan::{MemorySink, OutputSink};
///
/// let sink = MemorySink::new();
/// let mut writer = sink.clone();
/// writer.emit("hello");
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
///
/// [`Game`]: crate::Game
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line emitted so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drops all recorded lines.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}

/// Blocks before each played turn until something outside the game says go.
pub trait TurnGate {
    /// Waits for confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmation channel fails.
    fn wait(&mut self) -> io::Result<()>;
}

fn read_confirmation(reader: &mut impl BufRead) -> io::Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}

/// Waits for a line from any buffered reader.
///
/// End of input counts as confirmation.
///
/// ```
/// use std::io::Cursor;
/// use ethan::{LineGate, TurnGate};
///
/// let mut gate = LineGate::new(Cursor::new("\n"));
/// assert!(gate.wait().is_ok());
/// assert!(gate.wait().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct LineGate<R> {
    reader: R,
}

impl<R: BufRead> LineGate<R> {
    /// Creates a gate reading confirmations from `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> TurnGate for LineGate<R> {
    fn wait(&mut self) -> io::Result<()> {
        read_confirmation(&mut self.reader)
    }
}

/// Waits for a line on standard input.
///
/// End of input counts as confirmation, so a closed stdin lets the game run on.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinGate;

impl TurnGate for StdinGate {
    fn wait(&mut self) -> io::Result<()> {
        read_confirmation(&mut io::stdin().lock())
    }
}
