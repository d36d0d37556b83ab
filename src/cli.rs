//! Command-line interface for strictly_neutrino.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Neutrino - rules engine and terminal board for Neutrino
#[derive(Parser, Debug)]
#[command(name = "strictly_neutrino")]
#[command(about = "Play, replay and inspect Neutrino games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game between two people at this terminal
    Play {
        /// Scenario file to start from (standard position if omitted)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },

    /// Apply a scenario's moves and print each transition
    Replay {
        /// Scenario file with the moves to replay
        #[arg(short, long)]
        scenario: PathBuf,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the 64-bit encoding of a starting board
    Encode {
        /// Scenario file to encode (standard position if omitted)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },

    /// Print the board stored in a 64-bit encoding
    Decode {
        /// Encoded board, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_encoded)]
        value: u64,

        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the legal moves of a starting board
    Moves {
        /// Scenario file to inspect (standard position if omitted)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },
}

/// Parses a decimal or `0x` hex encoded board.
pub fn parse_encoded(text: &str) -> Result<u64, String> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => text.replace('_', "").parse::<u64>(),
    };
    parsed.map_err(|e| format!("'{}' is not a decimal or 0x hex number: {}", text, e))
}
