//! Match orchestration between two move sources.

use crate::players::MoveSource;
use anyhow::{Result, bail};
use tactix_core::{Board, Mark, Outcome};
use tracing::{debug, info};

/// Where a match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Moves are still being accepted.
    InProgress,
    /// The match ended with the given outcome; no further moves.
    Finished(Outcome),
}

/// Events handed to the caller's observer as the match advances.
#[derive(Debug)]
pub enum MatchEvent<'a> {
    /// The named seat is about to choose a move.
    Thinking {
        /// Display name of the active seat's source.
        seat: &'a str,
    },
    /// A move was applied; `board` is the snapshot after it.
    Moved {
        /// Display name of the seat that moved.
        seat: &'a str,
        /// Cell index that was occupied.
        index: usize,
        /// Read-only board snapshot after the placement.
        board: &'a Board,
    },
    /// The match reached a terminal outcome.
    Over {
        /// The final outcome (never `InProgress`).
        outcome: Outcome,
    },
}

/// Runs one match between two seats.
///
/// Owns the single live board; the X seat always moves first. Search
/// and move selection only ever see read-only snapshots.
pub struct Match {
    board: Board,
    to_move: Mark,
    state: MatchState,
    seat_x: Box<dyn MoveSource>,
    seat_o: Box<dyn MoveSource>,
}

impl Match {
    /// Creates a match with an empty board, `seat_x` to move first.
    pub fn new(seat_x: Box<dyn MoveSource>, seat_o: Box<dyn MoveSource>) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            state: MatchState::InProgress,
            seat_x,
            seat_o,
        }
    }

    /// Read-only view of the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current match state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Plays until the first win or draw and returns the outcome.
    ///
    /// `on_event` observes every move and the final outcome; it is
    /// where rendering hooks in. Calling `play` on a finished match
    /// returns the recorded outcome without consulting any source.
    ///
    /// # Errors
    ///
    /// Fails if a source fails (for example stdin closing under an
    /// interactive seat) or returns an index that violates its
    /// contract.
    pub fn play(&mut self, mut on_event: impl FnMut(MatchEvent<'_>)) -> Result<Outcome> {
        loop {
            if let MatchState::Finished(outcome) = self.state {
                return Ok(outcome);
            }

            let mark = self.to_move;
            let seat = match mark {
                Mark::X => &mut self.seat_x,
                Mark::O => &mut self.seat_o,
            };
            on_event(MatchEvent::Thinking { seat: seat.name() });

            let index = seat.next_move(&self.board, mark)?;
            if let Err(err) = self.board.place(index, mark) {
                bail!("{} returned index {index}: {err}", seat.name());
            }
            debug!(seat = seat.name(), %mark, index, "move applied");
            on_event(MatchEvent::Moved {
                seat: seat.name(),
                index,
                board: &self.board,
            });

            let outcome = self.board.evaluate();
            if outcome == Outcome::InProgress {
                self.to_move = mark.opponent();
            } else {
                info!(%outcome, "match over");
                self.state = MatchState::Finished(outcome);
                on_event(MatchEvent::Over { outcome });
            }
        }
    }
}
