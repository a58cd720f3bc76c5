//! Cells written as a column letter and a row digit, e.g. `B3` for row 3,
//! column 1.

use teeko::{Coord, Move, Phase, BOARD_SIZE, COLUMN_LETTERS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordParseError {
    WrongLength,
    InvalidColumn(char),
    InvalidRow(char),
}

impl std::error::Error for CoordParseError {}

impl std::fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordParseError::WrongLength => {
                write!(f, "A cell is a column letter followed by a row digit, like B3")
            }
            CoordParseError::InvalidColumn(c) => {
                write!(f, "'{}' is not a column, expected one of A to E", c)
            }
            CoordParseError::InvalidRow(c) => {
                write!(f, "'{}' is not a row, expected one of 0 to 4", c)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    WrongNumberOfCells { expected: usize, found: usize },
    InvalidCell(CoordParseError),
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::InvalidCell(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveParseError::WrongNumberOfCells { expected: 1, found } => {
                write!(f, "Expected the cell to drop a piece on, got {} cells", found)
            }
            MoveParseError::WrongNumberOfCells { expected, found } => write!(
                f,
                "Expected {} cells (the piece to move and where to), got {}",
                expected, found
            ),
            MoveParseError::InvalidCell(err) => write!(f, "{}", err),
        }
    }
}

impl From<CoordParseError> for MoveParseError {
    fn from(err: CoordParseError) -> Self {
        MoveParseError::InvalidCell(err)
    }
}

/// Parses a single cell. The column letter may be lowercase.
pub fn parse_coord(s: &str) -> Result<Coord, CoordParseError> {
    let mut chars = s.chars();
    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CoordParseError::WrongLength);
    };
    let col = COLUMN_LETTERS
        .iter()
        .position(|&l| l == letter.to_ascii_uppercase())
        .ok_or(CoordParseError::InvalidColumn(letter))?;
    let row = digit
        .to_digit(10)
        .filter(|&row| row < u32::from(BOARD_SIZE))
        .ok_or(CoordParseError::InvalidRow(digit))?;
    Ok(Coord::new(row as u8, col as u8))
}

/// Formats a cell, e.g. `B3`.
pub fn format_coord(coord: Coord) -> String {
    format!("{}{}", COLUMN_LETTERS[coord.col() as usize], coord.row())
}

/// Parses a line of input into a move for the given phase: one cell in the
/// drop phase, and the cell to move from followed by the cell to move to in
/// the move phase.
pub fn parse_move(line: &str, phase: Phase) -> Result<Move, MoveParseError> {
    let cells: Vec<&str> = line.split_whitespace().collect();
    match (phase, cells.as_slice()) {
        (Phase::Drop, [to]) => Ok(Move::Placement {
            to: parse_coord(to)?,
        }),
        (Phase::Move, [from, to]) => Ok(Move::Relocation {
            from: parse_coord(from)?,
            to: parse_coord(to)?,
        }),
        (Phase::Drop, _) => Err(MoveParseError::WrongNumberOfCells {
            expected: 1,
            found: cells.len(),
        }),
        (Phase::Move, _) => Err(MoveParseError::WrongNumberOfCells {
            expected: 2,
            found: cells.len(),
        }),
    }
}

pub fn format_move(mv: Move) -> String {
    match mv {
        Move::Placement { to } => format_coord(to),
        Move::Relocation { to, from } => format!("{} {}", format_coord(from), format_coord(to)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_round_trips() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                assert_eq!(parse_coord(&format_coord(coord)), Ok(coord));
            }
        }
    }

    #[test]
    fn letter_is_the_column() {
        assert_eq!(parse_coord("B3"), Ok(Coord::new(3, 1)));
        assert_eq!(parse_coord("e0"), Ok(Coord::new(0, 4)));
        assert_eq!(format_coord(Coord::new(4, 0)), "A4");
    }

    #[test]
    fn malformed_cells() {
        assert_eq!(parse_coord(""), Err(CoordParseError::WrongLength));
        assert_eq!(parse_coord("B"), Err(CoordParseError::WrongLength));
        assert_eq!(parse_coord("B33"), Err(CoordParseError::WrongLength));
        assert_eq!(parse_coord("F1"), Err(CoordParseError::InvalidColumn('F')));
        assert_eq!(parse_coord("3B"), Err(CoordParseError::InvalidColumn('3')));
        assert_eq!(parse_coord("A5"), Err(CoordParseError::InvalidRow('5')));
        assert_eq!(parse_coord("Ax"), Err(CoordParseError::InvalidRow('x')));
    }

    #[test]
    fn moves_depend_on_the_phase() {
        assert_eq!(
            parse_move(" c2 ", Phase::Drop),
            Ok(Move::Placement {
                to: Coord::new(2, 2)
            })
        );
        assert_eq!(
            parse_move("C2 D3", Phase::Move),
            Ok(Move::Relocation {
                to: Coord::new(3, 3),
                from: Coord::new(2, 2),
            })
        );
        assert_eq!(
            parse_move("C2 D3", Phase::Drop),
            Err(MoveParseError::WrongNumberOfCells {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            parse_move("C2", Phase::Move),
            Err(MoveParseError::WrongNumberOfCells {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_move("C2 Q3", Phase::Move),
            Err(MoveParseError::InvalidCell(CoordParseError::InvalidColumn(
                'Q'
            )))
        );
    }

    #[test]
    fn moves_round_trip() {
        let mv = Move::Relocation {
            to: Coord::new(0, 1),
            from: Coord::new(1, 1),
        };
        assert_eq!(format_move(mv), "B1 B0");
        assert_eq!(parse_move(&format_move(mv), Phase::Move), Ok(mv));
    }
}
