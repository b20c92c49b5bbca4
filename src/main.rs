//! Tactix - tic-tac-toe in the terminal.
//!
//! With no subcommand, runs the classic command loop:
//! `start <seat> <seat>` to play, `exit` to quit.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tactix::cli::{Cli, Command, ReplCommand, SeatKind, parse_command};
use tactix::orchestrator::{Match, MatchEvent};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Play { x, o }) => play_match(x, o),
        None => run_command_loop(),
    }
}

/// Runs the interactive command loop until `exit` or end of input.
fn run_command_loop() -> Result<()> {
    // Locks stdin per read; a human seat takes its own lock while a
    // match runs.
    let stdin = io::stdin();
    loop {
        print!("Input command: > ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }
        match parse_command(&line) {
            Some(ReplCommand::Exit) => return Ok(()),
            Some(ReplCommand::Start(x, o)) => play_match(x, o)?,
            None => println!("Bad parameters!"),
        }
    }
}

/// Plays one match and prints the board after every move.
fn play_match(x: SeatKind, o: SeatKind) -> Result<()> {
    info!(?x, ?o, "starting match");
    let mut game = Match::new(x.into_source(), o.into_source());
    println!("{}", game.board().display());
    let outcome = game.play(|event| match event {
        MatchEvent::Thinking { seat } => {
            if seat != "user" {
                println!("Making move level \"{seat}\"");
            }
        }
        MatchEvent::Moved { board, .. } => println!("{}", board.display()),
        MatchEvent::Over { .. } => {}
    })?;
    println!("{outcome}");
    Ok(())
}
