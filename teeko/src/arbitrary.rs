use quickcheck::{Arbitrary, Gen};

use crate::{generate_successors, winning_piece, Board, Coord, Piece, BOARD_SIZE};

/// A board reached by legal play from the empty board, together with the
/// piece whose turn it is. Nobody has won yet.
#[derive(Clone, Debug)]
pub struct Position {
    pub board: Board,
    pub to_move: Piece,
}

impl Arbitrary for Position {
    fn arbitrary(g: &mut Gen) -> Self {
        let plies = usize::arbitrary(g) % 21;
        let mut board = Board::new();
        let mut to_move = Piece::Black;
        for _ in 0..plies {
            // Winning moves are skipped so that the game is never over
            let candidates: Vec<_> = generate_successors(&board, to_move)
                .into_iter()
                .filter(|&mv| winning_piece(&board.with_move(mv, to_move)).is_none())
                .collect();
            let Some(&mv) = g.choose(&candidates) else {
                break;
            };
            board.apply(mv, to_move);
            to_move = to_move.opponent();
        }
        Position { board, to_move }
    }
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        Position::arbitrary(g).board
    }
}

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Piece::Black, Piece::Red]).unwrap()
    }
}

impl Arbitrary for Coord {
    fn arbitrary(g: &mut Gen) -> Self {
        Coord::new(u8::arbitrary(g) % BOARD_SIZE, u8::arbitrary(g) % BOARD_SIZE)
    }
}
