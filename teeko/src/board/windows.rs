use crate::{Coord, BOARD_SIZE};

/// The geometric shapes that make a win.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Horizontal,
    Vertical,
    /// A "\" line, from top-left to bottom-right.
    Diagonal,
    /// A "/" line, from bottom-left to top-right.
    AntiDiagonal,
    /// A 2x2 square.
    Box,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Horizontal => write!(f, "horizontal line"),
            Pattern::Vertical => write!(f, "vertical line"),
            Pattern::Diagonal => write!(f, "diagonal line"),
            Pattern::AntiDiagonal => write!(f, "anti-diagonal line"),
            Pattern::Box => write!(f, "box"),
        }
    }
}

/// Four cells that win the game when they all hold the same piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    pub pattern: Pattern,
    pub cells: [Coord; 4],
}

const RUN: u8 = 4;
/// Number of start positions of a run of four along one line of the board.
const STARTS: u8 = BOARD_SIZE - RUN + 1;

/// All 44 windows of the board.
///
/// The order is fixed: all horizontal runs (by row, then start column),
/// all vertical runs (by column, then start row), the "\" runs, the "/" runs
/// (each identified by its bottom-left end), and finally the boxes by their
/// top-left corner. Win detection reports the first complete window in this
/// order.
pub fn windows() -> impl Iterator<Item = Window> {
    let horizontal = (0..BOARD_SIZE).flat_map(|row| {
        (0..STARTS).map(move |col| Window {
            pattern: Pattern::Horizontal,
            cells: [0, 1, 2, 3].map(|k| Coord::new(row, col + k)),
        })
    });
    let vertical = (0..BOARD_SIZE).flat_map(|col| {
        (0..STARTS).map(move |row| Window {
            pattern: Pattern::Vertical,
            cells: [0, 1, 2, 3].map(|k| Coord::new(row + k, col)),
        })
    });
    let diagonal = (0..STARTS).flat_map(|row| {
        (0..STARTS).map(move |col| Window {
            pattern: Pattern::Diagonal,
            cells: [0, 1, 2, 3].map(|k| Coord::new(row + k, col + k)),
        })
    });
    let anti_diagonal = (RUN - 1..BOARD_SIZE).flat_map(|row| {
        (0..STARTS).map(move |col| Window {
            pattern: Pattern::AntiDiagonal,
            cells: [0, 1, 2, 3].map(|k| Coord::new(row - k, col + k)),
        })
    });
    let boxes = (0..BOARD_SIZE - 1).flat_map(|row| {
        (0..BOARD_SIZE - 1).map(move |col| Window {
            pattern: Pattern::Box,
            cells: [
                Coord::new(row, col),
                Coord::new(row + 1, col),
                Coord::new(row, col + 1),
                Coord::new(row + 1, col + 1),
            ],
        })
    });
    horizontal
        .chain(vertical)
        .chain(diagonal)
        .chain(anti_diagonal)
        .chain(boxes)
}
