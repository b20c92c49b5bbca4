//! Column/row addressing contract for input layers.

use serde::{Deserialize, Serialize};

/// A board coordinate as entered by a player: column then row, both
/// in `1..=3`, with row 3 the top of the board and row 1 the bottom.
///
/// The mapping to flat indices is fixed and must be preserved for
/// compatibility with the input layer:
///
/// ```text
/// (1,3) (2,3) (3,3)      0 1 2
/// (1,2) (2,2) (3,2)  ->  3 4 5
/// (1,1) (2,1) (3,1)      6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    col: u8,
    row: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if either component is
    /// outside `1..=3`.
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if (1..=3).contains(&col) && (1..=3).contains(&row) {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// The column component (1-3, ascending left to right).
    pub fn col(self) -> u8 {
        self.col
    }

    /// The row component (1-3, ascending bottom to top).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Converts to the flat cell index (0-8).
    pub fn index(self) -> usize {
        (3 - self.row as usize) * 3 + (self.col as usize - 1)
    }

    /// Recovers the coordinate for a flat cell index, or `None` if
    /// the index is outside `0..9`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self {
                col: (index % 3 + 1) as u8,
                row: (3 - index / 3) as u8,
            })
        } else {
            None
        }
    }
}
