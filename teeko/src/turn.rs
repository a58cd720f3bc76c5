use crate::{winning_piece, Board, IllegalMove, Move, Phase, Piece};

/// Summarizes the outcome of playing a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Normal,
    GameEnded { winner: Piece },
}

/// Checks that `piece` may play `mv` on this board.
///
/// The phase is checked first, then the source of a relocation (ownership,
/// then distance), then the destination.
pub fn validate_move(board: &Board, piece: Piece, mv: Move) -> Result<(), IllegalMove> {
    match (board.phase(), mv) {
        (Phase::Move, Move::Placement { .. }) => return Err(IllegalMove::PlacementInMovePhase),
        (Phase::Drop, Move::Relocation { .. }) => return Err(IllegalMove::RelocationInDropPhase),
        (_, Move::Placement { .. }) => {}
        (_, Move::Relocation { to, from }) => {
            if board.get(from) != Some(piece) {
                return Err(IllegalMove::SourceNotOwned { from });
            }
            if from.distance(to) != 1 {
                return Err(IllegalMove::NotAdjacent { from, to });
            }
        }
    }
    let to = mv.target();
    if !board.is_empty_at(to) {
        return Err(IllegalMove::DestinationOccupied { to });
    }
    Ok(())
}

/// Validates a move and, if it is legal, applies it to the board.
///
/// The board is left untouched if the move is illegal.
pub fn execute_turn(
    board: &mut Board,
    piece: Piece,
    mv: Move,
) -> Result<TurnOutcome, IllegalMove> {
    validate_move(board, piece, mv)?;
    board.apply(mv, piece);
    Ok(match winning_piece(board) {
        Some(winner) => TurnOutcome::GameEnded { winner },
        None => TurnOutcome::Normal,
    })
}
