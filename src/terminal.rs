//! Line-based play for two people sharing one terminal.

use crate::games::neutrino::{GameController, Move, Player};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A player won.
    Won(Player),
    /// The user typed `quit`.
    Quit,
    /// Input ran out before the game finished.
    EndOfInput,
}

/// Runs the prompt loop until the game is won or the user leaves.
///
/// Each line is a move such as `2,2 -> 2,0`, `hint` to list legal moves,
/// or `quit`. Illegal moves are reported and the same player is asked
/// again.
#[instrument(skip_all, fields(phase = ?game.phase()))]
pub fn play<R: BufRead, W: Write>(
    game: &mut GameController,
    input: R,
    out: &mut W,
) -> io::Result<SessionEnd> {
    if let Some(winner) = game.winner() {
        writeln!(out, "{}", game.board().display_with_coordinates())?;
        writeln!(out, "{}", game.phase())?;
        return Ok(SessionEnd::Won(winner));
    }

    let mut lines = input.lines();
    loop {
        writeln!(out, "{}", game.board().display_with_coordinates())?;
        write!(out, "{}\n> ", game.phase())?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            return Ok(SessionEnd::EndOfInput);
        };
        let command = line.trim();
        debug!(command, "Read command");

        match command {
            "" => continue,
            "quit" | "q" => {
                info!("Player left the game");
                return Ok(SessionEnd::Quit);
            }
            "hint" | "moves" => {
                for mv in game.legal_moves() {
                    writeln!(out, "  {}", mv)?;
                }
                continue;
            }
            _ => {}
        }

        let mv = match command.parse::<Move>() {
            Ok(mv) => mv,
            Err(e) => {
                writeln!(out, "Could not read move: {}", e)?;
                continue;
            }
        };

        match game.make_move(mv) {
            Ok(phase) => {
                if let Some(winner) = phase.winner() {
                    writeln!(out, "{}", game.board().display_with_coordinates())?;
                    writeln!(out, "{}", phase)?;
                    return Ok(SessionEnd::Won(winner));
                }
            }
            Err(e) => writeln!(out, "Illegal move: {}", e)?,
        }
    }
}
