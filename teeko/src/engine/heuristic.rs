use crate::{windows, Board, Pattern, Piece};

/// Weight of a single piece in a window.
const PIECE_WEIGHT: f64 = 0.2;

/// How diagonal windows are counted by [`heuristic()`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DiagonalWeighting {
    /// Every cell of a window counts once.
    #[default]
    Single,
    /// Every cell of a "\" or "/" window counts twice, so diagonal lines look
    /// twice as advanced as they are. Scores can then reach 1.2, which is
    /// above the value of a won game.
    Doubled,
}

/// Static score of a board without a winner, from the point of view of `me`.
///
/// Looks at every window (see [`windows()`]) and rewards the single window
/// with the most of `me`'s pieces, and penalizes the single window with the
/// most of the opponent's pieces:
///
/// `max(0.2 * mine) + min(-0.2 * theirs)`
///
/// With [`DiagonalWeighting::Single`] the result lies in `[-0.8, 0.8]`.
pub fn heuristic(board: &Board, me: Piece, weighting: DiagonalWeighting) -> f64 {
    assert!(
        crate::winning_piece(board).is_none(),
        "heuristic called on a finished game"
    );
    let opponent = me.opponent();
    let mut best_mine = f64::NEG_INFINITY;
    let mut worst_theirs = f64::INFINITY;
    for window in windows() {
        let multiplicity = match (window.pattern, weighting) {
            (Pattern::Diagonal | Pattern::AntiDiagonal, DiagonalWeighting::Doubled) => 2,
            _ => 1,
        };
        let (mut mine, mut theirs) = (0u8, 0u8);
        for cell in window.cells {
            match board.get(cell) {
                Some(piece) if piece == me => mine += multiplicity,
                Some(piece) if piece == opponent => theirs += multiplicity,
                _ => {}
            }
        }
        // Keep the products in this exact form. Scores are compared for
        // equality when breaking ties, so they must be reproducible bit for bit.
        best_mine = best_mine.max(f64::from(mine) * PIECE_WEIGHT);
        worst_theirs = worst_theirs.min(f64::from(theirs) * -PIECE_WEIGHT);
    }
    best_mine + worst_theirs
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::Position;
    use crate::board;

    quickcheck! {
        fn bounded(position: Position, me: Piece) -> bool {
            let score = heuristic(&position.board, me, DiagonalWeighting::Single);
            (-0.8..=0.8).contains(&score)
        }
    }

    quickcheck! {
        fn antisymmetric(position: Position) -> bool {
            let board = position.board;
            let black = heuristic(&board, Piece::Black, DiagonalWeighting::Single);
            let red = heuristic(&board, Piece::Red, DiagonalWeighting::Single);
            black == -red
        }
    }

    #[test]
    fn empty_board_is_even() {
        assert_eq!(
            heuristic(&Board::new(), Piece::Black, DiagonalWeighting::Single),
            0.0
        );
        assert_eq!(
            heuristic(&Board::new(), Piece::Red, DiagonalWeighting::Doubled),
            0.0
        );
    }

    #[test]
    fn best_window_counts_not_the_sum() {
        // Black has two separate pairs, red has a single piece.
        let board = board!(
            "
            bb...
            .....
            ...r.
            .....
            bb...
            "
        );
        let score = heuristic(&board, Piece::Black, DiagonalWeighting::Single);
        assert_eq!(score, 2.0 * PIECE_WEIGHT + -PIECE_WEIGHT);
        let score = heuristic(&board, Piece::Red, DiagonalWeighting::Single);
        assert_eq!(score, PIECE_WEIGHT + 2.0 * -PIECE_WEIGHT);
    }

    #[test]
    fn three_in_a_box() {
        let board = board!(
            "
            .....
            .bb..
            .b...
            .....
            ....r
            "
        );
        assert_eq!(
            heuristic(&board, Piece::Black, DiagonalWeighting::Single),
            3.0 * PIECE_WEIGHT + -PIECE_WEIGHT
        );
    }

    #[test]
    #[should_panic(expected = "heuristic called on a finished game")]
    fn finished_game_panics() {
        let board = board!(
            "
            bbbb.
            rrr..
            .....
            .....
            .....
            "
        );
        heuristic(&board, Piece::Red, DiagonalWeighting::Single);
    }

    #[test]
    fn doubled_diagonals() {
        let board = board!(
            "
            b....
            .b...
            .....
            .....
            .....
            "
        );
        // With single weighting the pair is worth two pieces, whether it is
        // counted in the diagonal or in the box.
        assert_eq!(
            heuristic(&board, Piece::Black, DiagonalWeighting::Single),
            2.0 * PIECE_WEIGHT + 0.0
        );
        assert_eq!(
            heuristic(&board, Piece::Black, DiagonalWeighting::Doubled),
            4.0 * PIECE_WEIGHT + 0.0
        );
        assert_eq!(
            heuristic(&board, Piece::Red, DiagonalWeighting::Doubled),
            0.0 + 4.0 * -PIECE_WEIGHT
        );
    }
}
