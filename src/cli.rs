//! Command-line interface for tactix.

use crate::players::{HeuristicSource, HumanSource, MoveSource, PerfectSource, RandomSource};
use clap::{Parser, Subcommand};

/// Tactix - tic-tac-toe with selectable-strength opponents
#[derive(Parser, Debug)]
#[command(name = "tactix")]
#[command(about = "Tic-tac-toe against opponents of selectable strength", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; without one, the interactive command loop starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single match and exit
    Play {
        /// Move source for the X seat (moves first)
        #[arg(value_enum)]
        x: SeatKind,

        /// Move source for the O seat
        #[arg(value_enum)]
        o: SeatKind,
    },
}

/// The kinds of move source a seat can be assigned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum SeatKind {
    /// Interactive human entering coordinates.
    User,
    /// Random empty cell.
    Easy,
    /// One-ply win/block heuristic.
    Medium,
    /// Exhaustive minimax search.
    Hard,
}

impl SeatKind {
    /// Builds the move source for this kind, named after it.
    pub fn into_source(self) -> Box<dyn MoveSource> {
        let name = self.to_string();
        match self {
            SeatKind::User => Box::new(HumanSource::new(name)),
            SeatKind::Easy => Box::new(RandomSource::new(name)),
            SeatKind::Medium => Box::new(HeuristicSource::new(name)),
            SeatKind::Hard => Box::new(PerfectSource::new(name)),
        }
    }
}

/// A parsed line of the interactive command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// `start <x> <o>`: play one match with the given seats.
    Start(SeatKind, SeatKind),
    /// `exit`: leave the command loop.
    Exit,
}

/// Parses a command-loop line; `None` means "Bad parameters!".
pub fn parse_command(line: &str) -> Option<ReplCommand> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some("exit"), None, None, None) => Some(ReplCommand::Exit),
        (Some("start"), Some(x), Some(o), None) => {
            let x = x.parse().ok()?;
            let o = o.parse().ok()?;
            Some(ReplCommand::Start(x, o))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        assert_eq!(
            parse_command("start user hard"),
            Some(ReplCommand::Start(SeatKind::User, SeatKind::Hard))
        );
        assert_eq!(
            parse_command("  start easy medium "),
            Some(ReplCommand::Start(SeatKind::Easy, SeatKind::Medium))
        );
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse_command("exit"), Some(ReplCommand::Exit));
        assert_eq!(parse_command("exit now"), None);
    }

    #[test]
    fn test_bad_parameters() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("start"), None);
        assert_eq!(parse_command("start user"), None);
        assert_eq!(parse_command("start user impossible"), None);
        assert_eq!(parse_command("start user easy extra"), None);
        assert_eq!(parse_command("begin user easy"), None);
    }

    #[test]
    fn test_seat_kind_round_trip() {
        for kind in [
            SeatKind::User,
            SeatKind::Easy,
            SeatKind::Medium,
            SeatKind::Hard,
        ] {
            assert_eq!(kind.to_string().parse::<SeatKind>(), Ok(kind));
        }
    }
}
