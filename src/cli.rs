//! Terminal front end
//!
//! Reads column numbers (1-based) line by line and prints the board after
//! every move. Input and output are generic so games can be scripted.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::COLS;
use crate::error::{GameError, MoveError};
use crate::game::{Game, Outcome, HUMAN};

/// Play `game` to the end.
///
/// Returns `Ok(None)` if the input closes before the game is decided.
pub fn run_terminal<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> io::Result<Option<Outcome>> {
    writeln!(
        output,
        "Connect Four: you are X, the computer is O (search depth {})",
        game.search_depth()
    )?;

    while !game.is_over() {
        write!(output, "\n{}", game.board())?;

        if game.is_computer_turn() {
            match game.play_computer() {
                Ok(mv) => {
                    writeln!(output, "Computer plays column {}", mv.col + 1)?;
                    if let Some(stats) = game.last_search() {
                        debug!(score = stats.score, nodes = stats.nodes, "computer reply");
                    }
                }
                Err(GameError::Search(_)) => break,
                Err(err) => return Err(io::Error::other(err)),
            }
            continue;
        }

        let Some(col) = prompt_column(&mut input, &mut output)? else {
            return Ok(None);
        };
        match game.play_human(col) {
            Ok(_) => {}
            Err(GameError::InvalidMove(err)) => {
                warn!(%err, "rejected human move");
                let reason = match err {
                    MoveError::ColumnFull { column } => format!("column {} is full", column + 1),
                    MoveError::InvalidColumn { column } => {
                        format!("column {} does not exist", column + 1)
                    }
                };
                writeln!(output, "Cannot play there: {reason}")?;
            }
            Err(err) => return Err(io::Error::other(err)),
        }
    }

    write!(output, "\n{}", game.board())?;
    let outcome = game.outcome().unwrap_or(Outcome::Draw);
    match outcome {
        Outcome::Winner(HUMAN) => writeln!(output, "You win!")?,
        Outcome::Winner(_) => writeln!(output, "The computer wins.")?,
        Outcome::Draw => writeln!(output, "Draw: the board is full.")?,
    }
    output.flush()?;
    Ok(Some(outcome))
}

/// Ask until a number in `1..=COLS` is entered; `None` on end of input.
fn prompt_column<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<usize>> {
    loop {
        write!(output, "Your move (1-{COLS}): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) => return Ok(Some(n - 1)),
            _ => writeln!(output, "Please enter a number between 1 and {COLS}.")?,
        }
    }
}
