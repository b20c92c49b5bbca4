//! Exhaustive minimax search over hypothetical boards.
//!
//! The state space of a 3x3 board is at most 9! positions, small
//! enough to recurse to the end of the game without pruning or
//! memoization. Do not reuse this search for a larger board without
//! adding alpha-beta pruning or a transposition table.

use crate::rules::check_winner;
use crate::types::{Board, Mark};
use tracing::instrument;

/// Scores a hypothetical board by perfect lookahead.
///
/// `to_move` is the mark that moves next; `maximizing` says whether
/// that mark plays for the score's owner. Scores are `+1` for a won
/// game from the owner's perspective, `-1` for a lost one, `0` for a
/// draw. Each recursive step copies the board by value, so sibling
/// branches never alias.
pub fn minimax(board: &Board, to_move: Mark, maximizing: bool) -> i32 {
    // A completed line can only belong to the mark that just moved;
    // if the side to move is maximizing, that line is a loss for it.
    if check_winner(board).is_some() {
        return if maximizing { -1 } else { 1 };
    }
    if board.is_full() {
        return 0;
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in board.empty_cells() {
        let mut child = *board;
        child
            .place(index, to_move)
            .expect("index came from empty_cells");
        let score = minimax(&child, to_move.opponent(), !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Picks the strongest move for `mark` on the given board.
///
/// Every empty cell is scored by placing `mark` there and handing the
/// opponent a minimizing search. The first index (in ascending cell
/// order) with the strictly greatest score is returned, which makes
/// the choice deterministic. `None` only on a full board, which the
/// match loop never asks about.
#[instrument]
pub fn best_move(board: &Board, mark: Mark) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for index in board.empty_cells() {
        let mut child = *board;
        child
            .place(index, mark)
            .expect("index came from empty_cells");
        let score = minimax(&child, mark.opponent(), false);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}
