//! Strictly Neutrino - command line
//!
//! Play Neutrino at the terminal and inspect positions.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use std::path::Path;
use strictly_neutrino::{
    GameController, GameSnapshot, Scenario, SessionEnd, decode, encode, legal_moves,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { scenario } => run_play(scenario.as_deref()),
        Command::Replay { scenario, json } => run_replay(&scenario, json),
        Command::Encode { scenario } => run_encode(scenario.as_deref()),
        Command::Decode { value, json } => run_decode(value, json),
        Command::Moves { scenario } => run_moves(scenario.as_deref()),
    }
}

/// Loads a scenario, or the standard game when no path is given.
#[instrument]
fn load_scenario(path: Option<&Path>) -> Result<Scenario> {
    match path {
        Some(path) => Scenario::from_file(path)
            .with_context(|| format!("Loading scenario {}", path.display())),
        None => Ok(Scenario::default()),
    }
}

/// Interactive two-player game
#[instrument]
fn run_play(scenario: Option<&Path>) -> Result<()> {
    let scenario = load_scenario(scenario)?;
    let moves = scenario.parsed_moves()?;
    let mut game = GameController::replay(scenario.board()?, &moves)
        .context("Replaying the scenario's moves")?;

    info!(moves = moves.len(), "Starting interactive game");
    println!("Enter moves as 'x,y -> x,y'. Type 'hint' for legal moves, 'quit' to leave.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let end = strictly_neutrino::play(&mut game, stdin.lock(), &mut stdout)?;
    match end {
        SessionEnd::Won(winner) => info!(%winner, moves = game.history().len(), "Game over"),
        SessionEnd::Quit | SessionEnd::EndOfInput => info!(?end, "Game abandoned"),
    }
    Ok(())
}

/// Applies a scenario's moves one by one, printing each step
#[instrument(skip(path), fields(path = %path.display()))]
fn run_replay(path: &Path, json: bool) -> Result<()> {
    let scenario = Scenario::from_file(path)?;
    let moves = scenario.parsed_moves()?;
    let mut game = GameController::new(scenario.board()?);
    let mut stdout = io::stdout().lock();

    if !json {
        writeln!(stdout, "{}\n{}\n", game.board(), game.phase())?;
    }
    for (i, mv) in moves.iter().enumerate() {
        let phase = game
            .make_move(*mv)
            .inspect_err(|e| warn!(move_number = i + 1, %mv, error = %e, "Replay stopped"))
            .with_context(|| format!("Move {} ({}) was rejected", i + 1, mv))?;
        if !json {
            writeln!(stdout, "{}. {}\n{}\n{}\n", i + 1, mv, game.board(), phase)?;
        }
    }

    if json {
        let snapshot = GameSnapshot::from(&game);
        writeln!(stdout, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    }
    Ok(())
}

/// Prints the encoding of a starting board
#[instrument]
fn run_encode(scenario: Option<&Path>) -> Result<()> {
    let board = load_scenario(scenario)?.board()?;
    let value = encode(&board);
    println!("{}", value);
    println!("{:#018x}", value);
    Ok(())
}

/// Prints the board behind an encoded value
#[instrument]
fn run_decode(value: u64, json: bool) -> Result<()> {
    let board = decode(value).with_context(|| format!("Decoding {:#x}", value))?;
    if json {
        let snapshot = GameSnapshot::of_board(&board);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}\n{}", board.display_with_coordinates(), board.phase());
    }
    Ok(())
}

/// Lists legal moves of a starting board
#[instrument]
fn run_moves(scenario: Option<&Path>) -> Result<()> {
    let board = load_scenario(scenario)?.board()?;
    println!("{}\n{}", board.display_with_coordinates(), board.phase());
    let moves = legal_moves(&board);
    if moves.is_empty() {
        println!("No legal moves");
    }
    for mv in moves {
        println!("  {}", mv);
    }
    Ok(())
}
