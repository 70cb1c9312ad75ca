//! Players and the input sources they read moves from.

use super::{Board, InputError, Symbol, parse_move};
use std::collections::VecDeque;
use tracing::{debug, instrument, warn};

/// Feedback sent to the source after a line that is not `row,col`.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input! Please enter row,col (e.g., 1,2)";

/// Supplies raw move lines for a player.
///
/// The console, a test script or a remote client all fit behind this
/// trait, so the game logic never touches stdin directly.
pub trait MoveSource {
    /// Returns the next raw line for `player`, or `None` once input is
    /// exhausted or interrupted.
    fn next_line(&mut self, player: &Player) -> Option<String>;

    /// Receives feedback about a rejected line or move.
    fn notify(&mut self, _message: &str) {}

    /// Called with the current board before a player is asked to move.
    fn show_board(&mut self, _board: &Board) {}
}

/// A participant: display name plus the symbol they mark the board with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the symbol this player marks the board with.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Reads lines from `source` until one parses as `row,col`.
    ///
    /// Malformed lines are reported through [`MoveSource::notify`] and
    /// skipped. Whether the coordinates are legal on the board is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Interrupted`] when the source runs dry.
    #[instrument(skip(self, source), fields(player = %self.name, symbol = %self.symbol))]
    pub fn get_move<S: MoveSource + ?Sized>(&self, source: &mut S) -> Result<(i32, i32), InputError> {
        loop {
            let Some(line) = source.next_line(self) else {
                warn!("Input source closed");
                return Err(InputError::Interrupted);
            };
            match parse_move(&line) {
                Ok(coords) => {
                    debug!(row = coords.0, col = coords.1, "Move read");
                    return Ok(coords);
                }
                Err(e) => {
                    debug!(error = %e, line = %line.trim(), "Malformed move line");
                    source.notify(INVALID_INPUT_MESSAGE);
                }
            }
        }
    }
}

/// In-memory [`MoveSource`] replaying a fixed list of lines.
///
/// Messages passed to `notify` are kept so tests can inspect them.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    lines: VecDeque<String>,
    messages: Vec<String>,
}

impl ScriptedMoves {
    /// Creates a script from the given lines, consumed front to back.
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            messages: Vec::new(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Feedback received so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl MoveSource for ScriptedMoves {
    fn next_line(&mut self, _player: &Player) -> Option<String> {
        self.lines.pop_front()
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
