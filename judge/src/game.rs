use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use teeko::{
    execute_turn, generate_successors, Board, IllegalMove, Move, Okay, Piece, Request,
    TurnOutcome,
};
use tracing::debug;

use crate::player::Contestant;
use crate::recording::Recorder;

#[derive(Debug)]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    /// The turn limit was reached, or the player to move had no legal move.
    Tie,
    IllegalMoveByPlayer { player_idx: usize, err: IllegalMove },
}

/// Returns an error only on communication failure, not when an
/// illegal move is played.
pub fn play_game<P: Contestant>(
    rng: &mut StdRng,
    player_1: &mut P,
    player_2: &mut P,
    max_turns: usize,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    // Assign one bot the black pieces and the other the red pieces randomly
    let pieces = {
        let mut arr = [Piece::Black, Piece::Red];
        arr.shuffle(rng);
        arr
    };
    let mut players = [player_1, player_2];

    // Inform the players about the new game, so that they can reset their state
    for (player, &piece) in players.iter_mut().zip(&pieces) {
        let _: Okay = player.perform_request(recorder, &Request::NewGame { piece })?;
    }

    // Black moves first
    let mut current_player_idx = if pieces[0] == Piece::Black { 0 } else { 1 };
    let mut board = Board::new();
    let mut game_result = GameResult::Tie;
    for turn in 0..max_turns {
        let piece = pieces[current_player_idx];
        if generate_successors(&board, piece).is_empty() {
            debug!(turn, %piece, "No legal move left");
            break;
        }
        let mv: Move =
            players[current_player_idx].perform_request(recorder, &Request::PlayTurn { board })?;
        match execute_turn(&mut board, piece, mv) {
            Ok(TurnOutcome::Normal) => {}
            Ok(TurnOutcome::GameEnded { winner }) => {
                debug!(turn, %winner, "Game ended\n{}", board);
                let player_idx = if pieces[0] == winner { 0 } else { 1 };
                game_result = GameResult::WonByPlayer { player_idx };
                break;
            }
            Err(err) => {
                game_result = GameResult::IllegalMoveByPlayer {
                    player_idx: current_player_idx,
                    err,
                };
                break;
            }
        }
        current_player_idx = 1 - current_player_idx;
    }

    if let Some(rec) = recorder {
        rec.write_game_recording()?;
    }

    Ok(game_result)
}
