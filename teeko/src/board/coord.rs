use serde::{Deserialize, Serialize};

use crate::{CoordOutOfBounds, BOARD_SIZE};

/// A cell on the board, as zero-based `(row, col)`.
///
/// Both components are always in `0..BOARD_SIZE`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: u8,
    col: u8,
}

/// Unchecked wire representation, validated on the way in.
#[derive(Deserialize)]
struct RawCoord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Panics if the coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Self {
        match Self::try_new(row, col) {
            Ok(coord) => coord,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(row: u8, col: u8) -> Result<Self, CoordOutOfBounds> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(CoordOutOfBounds { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// The cell at the given offset, or `None` if that is off the board.
    /// There is no wraparound.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::try_new(row, col).ok()
    }

    /// Chebyshev distance, i.e. the number of king steps from one cell to the other.
    pub fn distance(self, other: Coord) -> u8 {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }
}

impl TryFrom<RawCoord> for Coord {
    type Error = CoordOutOfBounds;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::try_new(raw.row, raw.col)
    }
}
