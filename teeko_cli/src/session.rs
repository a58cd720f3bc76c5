use std::io::{BufRead, Write};

use teeko::{execute_turn, generate_successors, Board, Engine, Piece, TurnOutcome};
use tracing::{debug, info};

use crate::notation::{format_move, parse_move};

/// How a game against the engine ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won { winner: Piece },
    /// The player to move had no legal move.
    Stuck { piece: Piece },
    /// The input ended before the game did.
    Quit,
}

/// Plays one game between a human, reading moves from `input`, and the
/// engine. Black moves first.
pub fn play<R: BufRead, W: Write>(
    engine: &Engine,
    mut input: R,
    mut output: W,
) -> anyhow::Result<SessionEnd> {
    let human = engine.opponent();
    writeln!(output, "You play {}, the engine plays {}.", human, engine.piece())?;
    let mut board = Board::new();
    let mut to_move = Piece::Black;
    let mut line = String::new();

    loop {
        writeln!(output, "\n{}", board)?;
        if generate_successors(&board, to_move).is_empty() {
            writeln!(output, "{} cannot move. The game is a draw.", to_move)?;
            return Ok(SessionEnd::Stuck { piece: to_move });
        }

        let outcome = if to_move == engine.piece() {
            let Some(mv) = engine.decide_move(&board) else {
                anyhow::bail!("The engine found no move");
            };
            writeln!(output, "{} plays {}", to_move, format_move(mv))?;
            execute_turn(&mut board, to_move, mv)?
        } else {
            loop {
                write!(output, "{} to move ({:?} phase): ", to_move, board.phase())?;
                output.flush()?;
                line.clear();
                if input.read_line(&mut line)? == 0 {
                    writeln!(output)?;
                    info!("Input ended, quitting");
                    return Ok(SessionEnd::Quit);
                }
                let mv = match parse_move(&line, board.phase()) {
                    Ok(mv) => mv,
                    Err(err) => {
                        writeln!(output, "{}", err)?;
                        continue;
                    }
                };
                match execute_turn(&mut board, to_move, mv) {
                    Ok(outcome) => break outcome,
                    Err(err) => writeln!(output, "Illegal move: {}", err)?,
                }
            }
        };

        if let TurnOutcome::GameEnded { winner } = outcome {
            writeln!(output, "\n{}\n{} wins!", board, winner)?;
            debug!(%winner, "Game over");
            return Ok(SessionEnd::Won { winner });
        }
        to_move = to_move.opponent();
    }
}
