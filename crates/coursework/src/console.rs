//! Line-oriented console I/O and the console move source.

use coursework_tictactoe::{Board, MoveSource, Player};
use std::io::{BufRead, Write};
use tracing::warn;

/// Prompting console over any reader/writer pair.
///
/// Generic so sessions can be driven from an in-memory buffer in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of output.
    ///
    /// A failed write is logged and otherwise ignored.
    pub fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            warn!(error = %e, "Console write failed");
        }
    }

    /// Shows `text` without a newline and reads one line of input.
    ///
    /// Returns `None` at end of input or when reading fails. The line
    /// terminator is stripped.
    pub fn prompt(&mut self, text: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{}", text).and_then(|()| self.output.flush()) {
            warn!(error = %e, "Console write failed");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!(error = %e, "Console read failed");
                None
            }
        }
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    fn next_line(&mut self, player: &Player) -> Option<String> {
        self.prompt(&format!(
            "{} ({}), enter your move (row,col): ",
            player.name(),
            player.symbol()
        ))
    }

    fn notify(&mut self, message: &str) {
        self.say(message);
    }

    fn show_board(&mut self, board: &Board) {
        self.say(&board.to_string());
    }
}
