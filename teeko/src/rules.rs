use crate::{windows, Board, Pattern, Piece, Window};

/// A completed window on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Win {
    pub piece: Piece,
    pub window: Window,
}

/// Finds the first window (in the order of [`windows()`]) whose four cells
/// all hold the same piece.
///
/// On a board reached by legal play at most one player can have a win, but
/// the search also looks at boards where that is not true, so the scan order
/// is fixed.
pub fn find_win(board: &Board) -> Option<Win> {
    windows().find_map(|window| {
        let [first, rest @ ..] = window.cells;
        let piece = board.get(first)?;
        rest.iter()
            .all(|&cell| board.get(cell) == Some(piece))
            .then_some(Win { piece, window })
    })
}

/// The piece that has won on this board, if any.
pub fn winning_piece(board: &Board) -> Option<Piece> {
    find_win(board).map(|win| win.piece)
}
