//! Win detection logic for tic-tac-toe.

use super::super::{BOARD_SIZE, Board, Cell, Symbol};
use tracing::instrument;

/// Every line that wins: rows, then columns, then the two diagonals.
const LINES: [[(i32, i32); BOARD_SIZE]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the symbol holding three in a line, `None` otherwise. Lines
/// are scanned in [`LINES`] order and the first complete one wins.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    LINES.iter().find_map(|[a, b, c]| {
        let first = board.cell(a.0, a.1)?;
        match first {
            Cell::Occupied(symbol)
                if board.cell(b.0, b.1) == Some(first) && board.cell(c.0, c.1) == Some(first) =>
            {
                Some(symbol)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    fn board_with(moves: &[(i32, i32, char)]) -> Board {
        let mut board = Board::new();
        for &(row, col, c) in moves {
            assert!(board.make_move(row, col, sym(c)));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let moves: Vec<_> = line.iter().map(|&(r, c)| (r, c, 'Z')).collect();
            let board = board_with(&moves);
            assert_eq!(check_winner(&board), Some(sym('Z')), "line {line:?}");
        }
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, 0, 'X'), (0, 1, 'X'), (0, 2, 'X')]);
        assert_eq!(check_winner(&board), Some(sym('X')));
    }

    #[test]
    fn test_winner_left_column() {
        let board = board_with(&[(0, 0, 'O'), (1, 0, 'O'), (2, 0, 'O')]);
        assert_eq!(check_winner(&board), Some(sym('O')));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(0, 2, 'O'), (1, 1, 'O'), (2, 0, 'O')]);
        assert_eq!(check_winner(&board), Some(sym('O')));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, 0, 'X'), (0, 1, 'O'), (0, 2, 'X')]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, 0, 'X'), (0, 1, 'X')]);
        assert_eq!(check_winner(&board), None);
    }
}
