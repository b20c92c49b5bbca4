//! Random move source: uniform choice among empty cells.

use super::MoveSource;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tactix_core::{Board, Mark};
use tracing::debug;

/// Picks a uniformly random empty cell.
///
/// The RNG is owned per instance so tests can inject a seed instead
/// of sharing process-wide state.
pub struct RandomSource {
    name: String,
    rng: StdRng,
}

impl RandomSource {
    /// Creates a source seeded from OS entropy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic source from a fixed seed.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomSource {
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        let open: Vec<usize> = board.empty_cells().collect();
        let index = *open
            .choose(&mut self.rng)
            .context("move requested on a full board")?;
        debug!(source = %self.name, %mark, index, "random move");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
