//! Move records and the errors a turn can produce.

use super::Symbol;
use serde::{Deserialize, Serialize};

/// A move applied to the board: a symbol placed at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index (0-2).
    pub row: i32,
    /// Column index (0-2).
    pub col: i32,
    /// The symbol that was placed.
    pub symbol: Symbol,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: i32, col: i32, symbol: Symbol) -> Self {
        Self { row, col, symbol }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({},{})", self.symbol, self.row, self.col)
    }
}

/// Why the board refused a move. The same player is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// Row or column outside `[0, 3)`.
    #[display("Cell ({},{}) is out of bounds", _0, _1)]
    OutOfBounds(i32, i32),

    /// The cell already holds a mark.
    #[display("Cell ({},{}) is already occupied", _0, _1)]
    Occupied(i32, i32),
}

impl std::error::Error for MoveRejection {}

/// Error returned by the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Both players were given the same symbol.
    #[display("Players must not share symbol {}", _0)]
    DuplicateSymbol(Symbol),

    /// The round already ended; call `restart` first.
    #[display("Round is already over")]
    RoundOver,

    /// A recorded move could not be replayed.
    #[display("Move {} of the replay is illegal: {}", _0, _1)]
    IllegalReplay(usize, MoveRejection),
}

impl std::error::Error for GameError {}

/// The input source stopped supplying moves.
///
/// This ends the session. The game state itself is left intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// End of input or user interrupt.
    #[display("Input interrupted")]
    Interrupted,
}

impl std::error::Error for InputError {}
