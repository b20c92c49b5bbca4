//! Win detection and winning-line probes.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 index triples that constitute a win when all three cells
/// hold the same mark: 3 rows, 3 columns, 2 diagonals. Enumeration
/// order is fixed; it is the tie-break order for line probes.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if any mark holds a completed line.
///
/// Returns the owner of the first completed line in [`WINNING_LINES`]
/// order, or `None` if no line is complete.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let cell = board.get(a);
        if cell != Some(Cell::Empty) && cell == board.get(b) && cell == board.get(c) {
            if let Some(Cell::Occupied(mark)) = cell {
                return Some(mark);
            }
        }
    }
    None
}

/// Finds a cell that would complete a line for `mark` in one move.
///
/// Scans [`WINNING_LINES`] in order and returns the empty cell of the
/// first line where `mark` already holds the other two. `None` if no
/// such line exists. Used both to win and, probed with the opponent's
/// mark, to block.
#[instrument]
pub fn winning_cell(board: &Board, mark: Mark) -> Option<usize> {
    for line in WINNING_LINES {
        let owned = line
            .iter()
            .filter(|&&i| board.get(i) == Some(Cell::Occupied(mark)))
            .count();
        if owned == 2 {
            if let Some(&open) = line.iter().find(|&&i| board.is_empty(i)) {
                return Some(open);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_all_canonical_lines() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for index in line {
                board.place(index, Mark::X).unwrap();
            }
            assert_eq!(check_winner(&board), Some(Mark::X), "line {line:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::O).unwrap();
        board.place(2, Mark::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winning_cell_completes_pair() {
        let mut board = Board::new();
        board.place(0, Mark::O).unwrap();
        board.place(1, Mark::O).unwrap();
        assert_eq!(winning_cell(&board, Mark::O), Some(2));
        assert_eq!(winning_cell(&board, Mark::X), None);
    }

    #[test]
    fn test_winning_cell_ignores_blocked_line() {
        // X X O on the top row: nothing to complete there.
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        board.place(2, Mark::O).unwrap();
        assert_eq!(winning_cell(&board, Mark::X), None);
    }

    #[test]
    fn test_winning_cell_first_line_wins_tie() {
        // X threatens both the top row (open at 2) and the left
        // column (open at 6); the row comes first in line order.
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        board.place(3, Mark::X).unwrap();
        assert_eq!(winning_cell(&board, Mark::X), Some(2));
    }
}
