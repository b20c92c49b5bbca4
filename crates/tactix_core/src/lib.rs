//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything about the game that is independent of
//! I/O: board storage, the coordinate contract with input layers,
//! win/draw rules, and exhaustive minimax search. Move selection
//! policies and turn orchestration live in the `tactix` crate on top
//! of these primitives.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coord;
pub mod rules;
pub mod search;
mod types;

pub use coord::Coord;
pub use rules::{WINNING_LINES, check_winner, evaluate, is_draw, winning_cell};
pub use search::{best_move, minimax};
pub use types::{Board, Cell, Mark, Outcome, PlaceError};
