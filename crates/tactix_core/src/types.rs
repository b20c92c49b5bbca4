//! Core domain types for the 3x3 board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// One of the two seat identities placed into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Mark of the first seat (moves first).
    #[display("X")]
    X,
    /// Mark of the second seat.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the mark of the opposing seat.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single addressable slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell claimed by a mark.
    Occupied(Mark),
}

/// Errors signalled when a placement request cannot be honored.
///
/// Both are recoverable by the caller; an interactive layer should
/// translate them into a re-prompt rather than a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The addressed cell already holds a mark.
    #[display("cell is already occupied")]
    CellOccupied,
    /// The index falls outside the 9-cell board.
    #[display("index is outside the board (must be 0-8)")]
    IndexOutOfRange,
}

/// Terminal/non-terminal classification of a board snapshot.
///
/// Never stored alongside the board; always recomputed from it.
/// The display strings are part of the CLI output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// The game can still continue.
    #[display("Game not finished")]
    InProgress,
    /// The given mark holds a winning line.
    #[display("{_0} wins")]
    Won(Mark),
    /// Full board with no winning line.
    #[display("Draw")]
    Draw,
}

/// 3x3 board state: 9 cells in row-major order, index 0 top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index, or `None` out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at `index` holds no mark.
    ///
    /// Callers must pass an index in `0..9`; anything else is a
    /// programming error and panics.
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
    }

    /// Checks whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Writes `mark` into the empty cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::IndexOutOfRange`] if `index >= 9` and
    /// [`PlaceError::CellOccupied`] if the cell already holds a mark.
    /// No cell changes on error.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlaceError::IndexOutOfRange)?;
        if *cell != Cell::Empty {
            return Err(PlaceError::CellOccupied);
        }
        *cell = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns all cells in index order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates over the indices of all empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// Formats the board as the classic console diagram.
    ///
    /// ```text
    /// ---------
    /// | X   O |
    /// |   X   |
    /// |     O |
    /// ---------
    /// ```
    pub fn display(&self) -> String {
        let mut out = String::from("---------\n");
        for row in 0..3 {
            out.push('|');
            for col in 0..3 {
                out.push(' ');
                out.push(match self.cells[row * 3 + col] {
                    Cell::Empty => ' ',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                });
            }
            out.push_str(" |\n");
        }
        out.push_str("---------");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
