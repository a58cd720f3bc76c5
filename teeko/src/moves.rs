use serde::{Deserialize, Serialize};

use crate::{Board, Coord, Phase, Piece};

/// A single turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Move {
    /// Put a new piece on an empty cell. Only legal in the drop phase.
    Placement { to: Coord },
    /// Move one of the mover's pieces to an adjacent empty cell. Only legal in
    /// the move phase.
    Relocation { to: Coord, from: Coord },
}

impl Move {
    /// The cell that holds the mover's piece after the move.
    pub fn target(self) -> Coord {
        match self {
            Move::Placement { to } | Move::Relocation { to, .. } => to,
        }
    }

    /// The cell that is vacated by a relocation.
    pub fn source(self) -> Option<Coord> {
        match self {
            Move::Placement { .. } => None,
            Move::Relocation { from, .. } => Some(from),
        }
    }
}

/// Neighbor offsets in the order relocations are generated.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
];

/// All legal moves for `piece` on this board.
///
/// In the drop phase these are placements on every empty cell, in row-major
/// order. In the move phase they are relocations of each of the player's
/// pieces (sources in row-major order) to each empty neighbor (in
/// [`NEIGHBOR_OFFSETS`] order).
///
/// The order is part of the contract: the engine breaks ties between equally
/// good moves in favor of the one generated first.
pub fn generate_successors(board: &Board, piece: Piece) -> Vec<Move> {
    match board.phase() {
        Phase::Drop => Board::coords()
            .filter(|&to| board.is_empty_at(to))
            .map(|to| Move::Placement { to })
            .collect(),
        Phase::Move => {
            assert!(
                board.count(piece) > 0,
                "{} has no pieces to relocate",
                piece
            );
            Board::coords()
                .filter(|&from| board.get(from) == Some(piece))
                .flat_map(|from| {
                    NEIGHBOR_OFFSETS
                        .iter()
                        .filter_map(move |&(d_row, d_col)| from.offset(d_row, d_col))
                        .filter(|&to| board.is_empty_at(to))
                        .map(move |to| Move::Relocation { to, from })
                })
                .collect()
        }
    }
}
