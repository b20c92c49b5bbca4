//! Move sources: the capability that decides which cell to occupy.

mod heuristic;
mod human;
mod perfect;
mod random;

pub use heuristic::HeuristicSource;
pub use human::HumanSource;
pub use perfect::PerfectSource;
pub use random::RandomSource;

use anyhow::Result;
use tactix_core::{Board, Mark};

/// A source of moves for one seat.
///
/// Bound to its seat once at match start and held for the match's
/// whole lifetime. Given a board with at least one empty cell, every
/// implementation returns the index of an empty cell; the match loop
/// checks for a terminal board before asking, so a request on a full
/// board is a programming error.
pub trait MoveSource {
    /// Picks the next cell (0-8) for `mark` on `board`.
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<usize>;

    /// The source's display name.
    fn name(&self) -> &str;
}
