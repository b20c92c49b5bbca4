//! Human move source reading coordinates from the terminal.

use super::MoveSource;
use anyhow::{Result, bail};
use std::io::{self, BufRead, Write};
use tactix_core::{Board, Coord, Mark};

/// Interactive source: prompts for `col row` coordinates on stdin.
///
/// Owns the whole retry loop. The match loop only ever sees a
/// validated empty-cell index; bad input is answered with a message
/// and a fresh prompt, never surfaced as an error.
pub struct HumanSource {
    name: String,
}

impl HumanSource {
    /// Creates a human source.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveSource for HumanSource {
    fn next_move(&mut self, board: &Board, _mark: Mark) -> Result<usize> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        prompt_for_move(board, &mut input, &mut io::stdout())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Prompts until the reader yields a valid empty-cell coordinate.
///
/// # Errors
///
/// Only I/O failures and end-of-input are errors; invalid coordinates
/// re-prompt.
pub fn prompt_for_move(
    board: &Board,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<usize> {
    loop {
        write!(output, "Enter the coordinates: > ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before a move was entered");
        }

        let mut parts = line.split_whitespace();
        let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
            writeln!(output, "You should enter numbers!")?;
            continue;
        };
        let (Ok(col), Ok(row)) = (first.parse::<u8>(), second.parse::<u8>()) else {
            writeln!(output, "You should enter numbers!")?;
            continue;
        };
        let Some(coord) = Coord::new(col, row) else {
            writeln!(output, "Coordinates should be from 1 to 3!")?;
            continue;
        };
        let index = coord.index();
        if !board.is_empty(index) {
            writeln!(output, "This cell is occupied! Choose another one!")?;
            continue;
        }
        return Ok(index);
    }
}
