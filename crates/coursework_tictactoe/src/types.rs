//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// The character identifying one player's marks on the board.
///
/// Whitespace is not a valid symbol because empty cells render as a blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Symbol(char);

/// Rejected symbol character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Symbol {:?} is not printable", character)]
pub struct SymbolError {
    /// The rejected character.
    pub character: char,
}

impl Symbol {
    /// Creates a symbol from a printable, non-whitespace character.
    #[instrument]
    pub fn new(character: char) -> Result<Self, SymbolError> {
        if character.is_whitespace() || character.is_control() {
            return Err(SymbolError { character });
        }
        Ok(Self(character))
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Self::new(character)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// One grid position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by the player owning this symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Character used when rendering this cell.
    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(symbol) => symbol.as_char(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells can only be written through [`Board::make_move`], which refuses
/// to overwrite a mark. Every reachable board is therefore the result of a
/// sequence of single-cell placements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps signed coordinates to a cell index, `None` when off the board.
    fn index(row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(row * BOARD_SIZE + col)
    }

    /// Returns the cell at the given coordinates, `None` when off the board.
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE * BOARD_SIZE] {
        &self.cells
    }

    /// True iff both coordinates lie in `[0, 3)` and the target cell is empty.
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// Writes `symbol` at the given cell if the move is valid.
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// off the board or already taken.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: i32, col: i32, symbol: Symbol) -> bool {
        match Self::index(row, col) {
            Some(idx) if self.cells[idx] == Cell::Empty => {
                self.cells[idx] = Cell::Occupied(symbol);
                true
            }
            _ => {
                debug!("Move rejected by board");
                false
            }
        }
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Returns the symbol owning a complete line, if any.
    pub fn check_winner(&self) -> Option<Symbol> {
        super::rules::check_winner(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  0   1   2")?;
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            writeln!(
                f,
                "{} {} | {} | {}",
                row,
                cells[0].glyph(),
                cells[1].glyph(),
                cells[2].glyph()
            )?;
            if row < BOARD_SIZE - 1 {
                writeln!(f, "  ---------")?;
            }
        }
        Ok(())
    }
}
