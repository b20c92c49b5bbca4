//! Game rules for tic-tac-toe.
//!
//! Pure functions for classifying board state. Rules are separated
//! from board storage so the search engine and the move policies can
//! share them without owning a board.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WINNING_LINES, check_winner, winning_cell};

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Classifies a board snapshot as won, drawn, or still in progress.
///
/// Lines are checked in the fixed [`WINNING_LINES`] order; the first
/// completed line found decides the winner. On boards reachable in a
/// legal game at most one mark can hold a completed line, so the
/// order does not affect the result.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

impl Board {
    /// Classifies this board; see [`evaluate`].
    pub fn evaluate(&self) -> Outcome {
        evaluate(self)
    }
}
