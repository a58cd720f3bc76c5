mod heuristic;

pub use heuristic::*;

use rand::Rng;
use tracing::{debug, trace};

use crate::{find_win, generate_successors, Board, Move, Piece};

/// Who has won, from the engine's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Engine,
    Opponent,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// The ply at which the search stops and scores boards with the
    /// [`heuristic()`] instead. With the default of 1, the engine looks at each
    /// of its own moves and every reply of the opponent.
    pub depth_cutoff: u32,
    pub diagonal_weighting: DiagonalWeighting,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth_cutoff: 1,
            diagonal_weighting: DiagonalWeighting::default(),
        }
    }
}

/// The result of a search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decision {
    pub mv: Move,
    /// The minimax value of the move: 1 for a forced win, -1 for a forced
    /// loss, and a heuristic score in between.
    pub score: f64,
    pub stats: SearchStats,
}

/// Counters collected during one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards visited below the root, including leaves.
    pub nodes: u64,
    /// Boards that were scored with the heuristic.
    pub heuristic_evaluations: u64,
}

/// A minimax player for one side of the board.
///
/// The engine does not own a board. It is given a snapshot for every
/// decision and never modifies it: each hypothetical move is applied to a
/// copy.
///
/// The search is exhaustive (no pruning) and deterministic. Among equally
/// scored moves, the one that comes first in [`generate_successors()`] order
/// is chosen.
#[derive(Clone, Debug)]
pub struct Engine {
    piece: Piece,
    config: EngineConfig,
}

impl Engine {
    pub fn new(piece: Piece, config: EngineConfig) -> Self {
        Self { piece, config }
    }

    /// Creates an engine that plays a randomly chosen piece.
    pub fn with_random_piece<R: Rng + ?Sized>(rng: &mut R, config: EngineConfig) -> Self {
        let piece = if rng.gen() { Piece::Black } else { Piece::Red };
        Self::new(piece, config)
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn opponent(&self) -> Piece {
        self.piece.opponent()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn winner(&self, board: &Board) -> Option<Winner> {
        find_win(board).map(|win| {
            if win.piece == self.piece {
                Winner::Engine
            } else {
                Winner::Opponent
            }
        })
    }

    /// Static score of a board without a winner, see [`heuristic()`].
    pub fn heuristic(&self, board: &Board) -> f64 {
        heuristic(board, self.piece, self.config.diagonal_weighting)
    }

    /// Picks the engine's move on a board where it is the engine's turn.
    ///
    /// Returns a placement in the drop phase and a relocation in the move
    /// phase, or `None` if the engine has no legal move at all.
    pub fn decide_move(&self, board: &Board) -> Option<Move> {
        self.search(board).map(|decision| decision.mv)
    }

    /// Like [`Self::decide_move()`], but also returns the score of the move and
    /// search statistics.
    pub fn search(&self, board: &Board) -> Option<Decision> {
        let mut stats = SearchStats::default();
        let mut best: Option<(Move, f64)> = None;
        for mv in generate_successors(board, self.piece) {
            let score = self.min_value(&board.with_move(mv, self.piece), 0, &mut stats);
            trace!(?mv, score, "Scored candidate");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        let (mv, score) = best?;
        debug!(
            piece = %self.piece,
            ?mv,
            score,
            nodes = stats.nodes,
            heuristic_evaluations = stats.heuristic_evaluations,
            "Decided on move"
        );
        Some(Decision { mv, score, stats })
    }

    /// The value of a finished game, if it is finished.
    fn game_value(&self, board: &Board) -> Option<f64> {
        self.winner(board).map(|winner| match winner {
            Winner::Engine => 1.0,
            Winner::Opponent => -1.0,
        })
    }

    /// Value of a board where it is the engine's turn.
    fn max_value(&self, board: &Board, depth: u32, stats: &mut SearchStats) -> f64 {
        stats.nodes += 1;
        if let Some(value) = self.game_value(board) {
            return value;
        }
        if depth >= self.config.depth_cutoff {
            stats.heuristic_evaluations += 1;
            return self.heuristic(board);
        }
        let mut value = f64::NEG_INFINITY;
        for mv in generate_successors(board, self.piece) {
            let child = board.with_move(mv, self.piece);
            value = value.max(self.min_value(&child, depth + 1, stats));
        }
        value
    }

    /// Value of a board where it is the opponent's turn.
    fn min_value(&self, board: &Board, depth: u32, stats: &mut SearchStats) -> f64 {
        stats.nodes += 1;
        if let Some(value) = self.game_value(board) {
            return value;
        }
        if depth >= self.config.depth_cutoff {
            stats.heuristic_evaluations += 1;
            return self.heuristic(board);
        }
        let opponent = self.opponent();
        let mut value = f64::INFINITY;
        for mv in generate_successors(board, opponent) {
            let child = board.with_move(mv, opponent);
            value = value.min(self.max_value(&child, depth + 1, stats));
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::Position;
    use crate::{board, execute_turn, winning_piece, Coord, Phase};

    fn engine(piece: Piece) -> Engine {
        Engine::new(piece, EngineConfig::default())
    }

    quickcheck! {
        fn decide_move_does_not_touch_the_board(position: Position) -> bool {
            let Position { board, to_move } = position;
            let before = board;
            engine(to_move).decide_move(&board);
            board == before
        }
    }

    quickcheck! {
        fn decided_moves_are_legal(position: Position) -> bool {
            let Position { board, to_move } = position;
            match engine(to_move).decide_move(&board) {
                Some(mv) => {
                    let mut after = board;
                    execute_turn(&mut after, to_move, mv).is_ok()
                }
                None => generate_successors(&board, to_move).is_empty(),
            }
        }
    }

    quickcheck! {
        fn move_kind_follows_phase(position: Position) -> bool {
            let Position { board, to_move } = position;
            match (board.phase(), engine(to_move).decide_move(&board)) {
                (Phase::Drop, Some(Move::Placement { .. })) => true,
                (Phase::Move, Some(Move::Relocation { from, .. })) => {
                    board.get(from) == Some(to_move)
                }
                (Phase::Move, None) => true,
                _ => false,
            }
        }
    }

    #[test]
    fn winner_is_relative_to_the_engine() {
        let board = board!(
            "
            bbbb.
            rrr..
            .....
            .....
            r....
            "
        );
        assert_eq!(engine(Piece::Black).winner(&board), Some(Winner::Engine));
        assert_eq!(engine(Piece::Red).winner(&board), Some(Winner::Opponent));
        assert_eq!(engine(Piece::Black).winner(&Board::new()), None);
    }

    #[test]
    fn random_piece_is_reproducible() {
        let config = EngineConfig::default();
        let a = Engine::with_random_piece(&mut StdRng::seed_from_u64(7), config);
        let b = Engine::with_random_piece(&mut StdRng::seed_from_u64(7), config);
        assert_eq!(a.piece(), b.piece());
        assert_eq!(a.opponent(), a.piece().opponent());
    }

    #[test]
    fn first_move_on_empty_board() {
        let decision = engine(Piece::Black).search(&Board::new()).unwrap();
        // Every opening scores the same, so the first cell is kept.
        assert_eq!(
            decision.mv,
            Move::Placement {
                to: Coord::new(0, 0)
            }
        );
        assert_eq!(decision.score, 0.0);
        assert_eq!(
            decision.stats,
            SearchStats {
                nodes: 25 + 25 * 24,
                heuristic_evaluations: 25 * 24,
            }
        );
    }

    #[test]
    fn deeper_search_on_empty_board() {
        let config = EngineConfig {
            depth_cutoff: 2,
            ..EngineConfig::default()
        };
        let decision = Engine::new(Piece::Black, config)
            .search(&Board::new())
            .unwrap();
        assert_eq!(
            decision.mv,
            Move::Placement {
                to: Coord::new(0, 0)
            }
        );
        // Black's second piece is placed before the heuristic is applied.
        assert_eq!(decision.score, 2.0 * 0.2 + -0.2);
        assert_eq!(
            decision.stats,
            SearchStats {
                nodes: 25 + 25 * 24 + 25 * 24 * 23,
                heuristic_evaluations: 25 * 24 * 23,
            }
        );
    }

    #[test]
    fn deeper_search_still_blocks() {
        let config = EngineConfig {
            depth_cutoff: 2,
            ..EngineConfig::default()
        };
        let board = board!(
            "
            bbb..
            .....
            ..r..
            .....
            ....r
            "
        );
        let decision = Engine::new(Piece::Red, config).search(&board).unwrap();
        assert_eq!(
            decision.mv,
            Move::Placement {
                to: Coord::new(0, 3)
            }
        );
        assert_eq!(decision.score, 0.0);
    }

    #[test]
    fn takes_an_immediate_win() {
        let board = board!(
            "
            .....
            .bbb.
            rr...
            .....
            ....r
            "
        );
        let decision = engine(Piece::Black).search(&board).unwrap();
        assert_eq!(
            decision.mv,
            Move::Placement {
                to: Coord::new(1, 0)
            }
        );
        assert_eq!(decision.score, 1.0);
    }

    #[test]
    fn blocks_a_line_threat() {
        let board = board!(
            "
            bbb..
            .....
            ..r..
            .....
            ....r
            "
        );
        assert_eq!(
            engine(Piece::Red).decide_move(&board),
            Some(Move::Placement {
                to: Coord::new(0, 3)
            })
        );
    }

    #[test]
    fn forced_loss_keeps_the_first_move() {
        // Black threatens both ends of the row, so every move loses.
        let board = board!(
            "
            .bbb.
            .....
            ..r..
            .....
            ....r
            "
        );
        let decision = engine(Piece::Red).search(&board).unwrap();
        assert_eq!(decision.score, -1.0);
        assert_eq!(
            decision.mv,
            Move::Placement {
                to: Coord::new(0, 0)
            }
        );
    }

    #[test]
    fn wins_by_relocation() {
        let board = board!(
            "
            bb...
            b....
            .b...
            rr...
            r.r..
            "
        );
        let decision = engine(Piece::Black).search(&board).unwrap();
        assert_eq!(
            decision.mv,
            Move::Relocation {
                to: Coord::new(1, 1),
                from: Coord::new(2, 1),
            }
        );
        assert_eq!(decision.score, 1.0);
    }

    #[test]
    fn engines_play_into_the_move_phase() {
        let black = engine(Piece::Black);
        let red = engine(Piece::Red);
        let mut board = Board::new();
        for ply in 0..8 {
            let current = if ply % 2 == 0 { &black } else { &red };
            let mv = current.decide_move(&board).unwrap();
            assert!(matches!(mv, Move::Placement { .. }));
            execute_turn(&mut board, current.piece(), mv).unwrap();
            assert_eq!(winning_piece(&board), None);
        }
        assert_eq!(
            board,
            board!(
                "
                brbrb
                rbr..
                .....
                .....
                .....
                "
            )
        );
        assert_eq!(board.phase(), Phase::Move);
        assert_eq!(
            black.decide_move(&board),
            Some(Move::Relocation {
                to: Coord::new(1, 3),
                from: Coord::new(0, 2),
            })
        );
    }
}
