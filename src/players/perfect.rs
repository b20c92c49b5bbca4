//! Exhaustive-search move source backed by minimax.

use super::MoveSource;
use anyhow::{Context, Result};
use tactix_core::{Board, Mark, best_move};
use tracing::debug;

/// Plays the minimax-optimal move; never loses from any position it
/// is handed.
///
/// Tie-breaks between equally scored cells by the lowest index, so
/// its play is fully deterministic.
pub struct PerfectSource {
    name: String,
}

impl PerfectSource {
    /// Creates a perfect-play source.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveSource for PerfectSource {
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        let index = best_move(board, mark).context("move requested on a full board")?;
        debug!(source = %self.name, %mark, index, "minimax move");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        board.place(3, Mark::O).unwrap();
        board.place(4, Mark::O).unwrap();
        let mut source = PerfectSource::new("hard");
        assert_eq!(source.next_move(&board, Mark::X).unwrap(), 2);
    }

    #[test]
    fn test_deterministic_opening() {
        let board = Board::new();
        let mut source = PerfectSource::new("hard");
        let first = source.next_move(&board, Mark::X).unwrap();
        for _ in 0..3 {
            assert_eq!(source.next_move(&board, Mark::X).unwrap(), first);
        }
    }
}
