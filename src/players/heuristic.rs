//! One-ply heuristic move source: win now, block, else random.

use super::MoveSource;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tactix_core::{Board, Mark, winning_cell};
use tracing::debug;

/// Looks one move ahead: completes its own two-in-a-line, otherwise
/// blocks the opponent's, otherwise plays a random empty cell.
///
/// Within the first two rules, the first matching line in the fixed
/// enumeration order decides; any such cell is objectively correct.
pub struct HeuristicSource {
    name: String,
    rng: StdRng,
}

impl HeuristicSource {
    /// Creates a source with an OS-entropy fallback RNG.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a source with a deterministic fallback RNG.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for HeuristicSource {
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        if let Some(index) = winning_cell(board, mark) {
            debug!(source = %self.name, %mark, index, "completing own line");
            return Ok(index);
        }
        if let Some(index) = winning_cell(board, mark.opponent()) {
            debug!(source = %self.name, %mark, index, "blocking opponent");
            return Ok(index);
        }
        let open: Vec<usize> = board.empty_cells().collect();
        let index = *open
            .choose(&mut self.rng)
            .context("move requested on a full board")?;
        debug!(source = %self.name, %mark, index, "random fallback");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
