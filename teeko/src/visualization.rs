use crate::{Board, BOARD_SIZE};

/// Column letters as used in the column legend.
pub const COLUMN_LETTERS: [char; BOARD_SIZE as usize] = ['A', 'B', 'C', 'D', 'E'];

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            write!(f, "{}:", row)?;
            for cell in cells {
                write!(f, " {}", cell.map_or('.', |piece| piece.symbol()))?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for letter in COLUMN_LETTERS {
            write!(f, " {}", letter)?;
        }
        Ok(())
    }
}
