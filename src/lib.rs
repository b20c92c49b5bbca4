//! Tactix library - tic-tac-toe with selectable-strength opponents.
//!
//! # Architecture
//!
//! - **Players**: move sources behind one trait - interactive human,
//!   random, one-ply heuristic, exhaustive minimax
//! - **Orchestrator**: owns the live board, alternates turns, stops
//!   at the first win or draw
//! - **Cli**: the `start <seat> <seat>` / `exit` command vocabulary
//!
//! Pure board state, rules, and search live in `tactix_core`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod orchestrator;
pub mod players;

pub use cli::{Cli, Command, ReplCommand, SeatKind, parse_command};
pub use orchestrator::{Match, MatchEvent, MatchState};
pub use players::{HeuristicSource, HumanSource, MoveSource, PerfectSource, RandomSource};
