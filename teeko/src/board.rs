mod coord;
mod windows;

use std::str::FromStr;

pub use coord::*;
pub use windows::*;

use serde::{Deserialize, Serialize};

use crate::Move;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 5;

/// How many pieces are dropped in total, by both players together,
/// before the move phase starts.
pub const DROP_ALLOTMENT: usize = 8;

/// One of the two piece colors. Black always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Black,
    Red,
}

impl Piece {
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Black => Piece::Red,
            Piece::Red => Piece::Black,
        }
    }

    /// The character used for this piece in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Piece::Black => 'b',
            Piece::Red => 'r',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Black => write!(f, "Black"),
            Piece::Red => write!(f, "Red"),
        }
    }
}

/// The stage of the game, derived from the number of pieces on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fewer than [`DROP_ALLOTMENT`] pieces are on the board; a turn places a new piece.
    Drop,
    /// All pieces are on the board; a turn moves a piece to an adjacent empty cell.
    Move,
}

/// A 5x5 grid where every cell is either empty or holds one piece.
///
/// The board is a plain value: copying it is cheap, and nothing about the
/// game is stored besides the cells. In particular, the [`Phase`] is
/// recomputed from the cells on every query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize]) -> Self {
        Self { cells: rows }
    }

    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        &self.cells
    }

    pub fn get(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.row() as usize][coord.col() as usize]
    }

    pub fn set(&mut self, coord: Coord, cell: Option<Piece>) {
        self.cells[coord.row() as usize][coord.col() as usize] = cell;
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// All coordinates of the board in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }

    /// Number of cells holding a piece of either color.
    pub fn non_empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Number of cells holding the given piece.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(piece))
            .count()
    }

    pub fn phase(&self) -> Phase {
        if self.non_empty_count() < DROP_ALLOTMENT {
            Phase::Drop
        } else {
            Phase::Move
        }
    }

    /// Apply a move for `piece` without checking that it is legal.
    ///
    /// Moves coming from outside the engine should go through
    /// [`execute_turn()`](crate::execute_turn) instead.
    pub fn apply(&mut self, mv: Move, piece: Piece) {
        match mv {
            Move::Placement { to } => {
                debug_assert!(self.is_empty_at(to));
                self.set(to, Some(piece));
            }
            Move::Relocation { to, from } => {
                debug_assert_eq!(self.get(from), Some(piece));
                self.set(from, None);
                self.set(to, Some(piece));
            }
        }
    }

    /// Like [`Self::apply()`], but returns the result as a new board.
    #[must_use]
    pub fn with_move(&self, mv: Move, piece: Piece) -> Board {
        let mut board = *self;
        board.apply(mv, piece);
        board
    }
}

/// The error type for the [`FromStr`] instance of [`Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardFromStrErr {
    WrongNumberOfRows,
    WrongRowLength { row: usize },
    InvalidCell(char),
}

impl FromStr for Board {
    type Err = BoardFromStrErr;

    /// Parses five whitespace-separated rows of five cells each, where a
    /// cell is `b` (black), `r` (red) or `.` (empty).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut num_rows = 0;
        for (row, line) in s.split_whitespace().enumerate() {
            if row >= BOARD_SIZE as usize {
                return Err(BoardFromStrErr::WrongNumberOfRows);
            }
            if line.chars().count() != BOARD_SIZE as usize {
                return Err(BoardFromStrErr::WrongRowLength { row });
            }
            for (col, c) in line.chars().enumerate() {
                board.cells[row][col] = match c {
                    'b' => Some(Piece::Black),
                    'r' => Some(Piece::Red),
                    '.' => None,
                    _ => return Err(BoardFromStrErr::InvalidCell(c)),
                };
            }
            num_rows += 1;
        }
        if num_rows != BOARD_SIZE as usize {
            return Err(BoardFromStrErr::WrongNumberOfRows);
        }
        Ok(board)
    }
}

/// Shorthand for creating boards from a diagram.
///
/// This macro is just calling the [`FromStr`] instance of [`Board`].
/// ```
/// # use teeko::{Coord, Piece};
/// let board = teeko::board!("
///     bbb..
///     .....
///     ..r..
///     .....
///     ....r
/// ");
/// assert_eq!(board.get(Coord::new(2, 2)), Some(Piece::Red));
/// assert_eq!(board.non_empty_count(), 5);
/// ```
#[macro_export]
macro_rules! board {
    ($diagram:literal) => {
        <$crate::Board as std::str::FromStr>::from_str($diagram)
            .expect("Invalid diagram given to board! macro")
    };
}
