use std::io::{BufRead, Write};

use teeko::{Board, Move, Okay, Piece, Request};
use tracing::debug;

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, piece: Piece);

    /// Returns a legal move for the bot's piece on this board.
    ///
    /// An error ends the bot process.
    fn play_turn(&mut self, board: Board) -> anyhow::Result<Move>;

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        self.run_with(std::io::stdin().lock(), std::io::stdout().lock())
    }

    /// Answers requests read from `input` until a [`Request::Bye`] or EOF.
    fn run_with<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()> {
        let mut buf = String::new();

        loop {
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = input.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the judge has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            match req {
                Request::NewGame { piece } => {
                    debug!(%piece, "New game");
                    self.new_game(piece);
                    serde_json::to_writer(&mut output, &Okay())?;
                }
                Request::PlayTurn { board } => {
                    let mv = self.play_turn(board)?;
                    serde_json::to_writer(&mut output, &mv)?;
                }
                Request::Bye => break Ok(()),
            }
            writeln!(output)?;
            output.flush()?;
        }
    }
}
