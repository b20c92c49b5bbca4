//! Draw detection.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is a draw: full with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Outcome};

    /// X O X / O X X / O X O - full, no line.
    fn drawn_board() -> Board {
        let mut board = Board::new();
        for (index, mark) in [
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ] {
            board.place(index, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = drawn_board();
        assert!(is_draw(&board));
        assert_eq!(board.evaluate(), Outcome::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        board.place(2, Mark::X).unwrap();
        board.place(3, Mark::O).unwrap();
        board.place(4, Mark::O).unwrap();
        assert!(!is_draw(&board));
        assert_eq!(board.evaluate(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_evaluate_in_progress() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.evaluate(), Outcome::InProgress);
    }
}
