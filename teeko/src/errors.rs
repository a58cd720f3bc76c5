use crate::Coord;

/// The error type for [`execute_turn()`](crate::execute_turn), i.e. for a move
/// supplied from outside the engine that breaks the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    PlacementInMovePhase,
    RelocationInDropPhase,
    SourceNotOwned { from: Coord },
    NotAdjacent { from: Coord, to: Coord },
    DestinationOccupied { to: Coord },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::PlacementInMovePhase => write!(
                f,
                "All pieces have been dropped, a piece must be moved instead"
            ),
            IllegalMove::RelocationInDropPhase => write!(
                f,
                "Pieces cannot be moved until all pieces have been dropped"
            ),
            IllegalMove::SourceNotOwned { from } => write!(
                f,
                "There is no piece of the player at ({}, {})",
                from.row(),
                from.col()
            ),
            IllegalMove::NotAdjacent { from, to } => write!(
                f,
                "A piece can only move to an adjacent cell, but ({}, {}) is not adjacent to ({}, {})",
                to.row(),
                to.col(),
                from.row(),
                from.col()
            ),
            IllegalMove::DestinationOccupied { to } => {
                write!(f, "The cell ({}, {}) is not empty", to.row(), to.col())
            }
        }
    }
}

/// A coordinate outside of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordOutOfBounds {
    pub row: u8,
    pub col: u8,
}

impl std::error::Error for CoordOutOfBounds {}

impl std::fmt::Display for CoordOutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coordinate ({}, {}) is outside of the 5x5 board",
            self.row, self.col
        )
    }
}
