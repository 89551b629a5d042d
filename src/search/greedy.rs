//! Hard AI: one-ply greedy search over nearby cells
//!
//! Every empty cell with a stone within `range` (Chebyshev) is scored with
//! [`evaluate_position`]. The highest score wins; on equal scores the first
//! cell in row-major order is kept. No replies are simulated.

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_position;

/// Default pruning radius around existing stones
pub const DEFAULT_SEARCH_RANGE: u8 = 2;

/// Result of a greedy search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best move found; the center on an empty board
    pub best_move: Option<Pos>,
    /// Heuristic score of `best_move` (0 for the center fallback)
    pub score: f64,
    /// Cells that passed pruning and were evaluated
    pub candidates: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct GreedySearcher {
    range: u8,
}

impl GreedySearcher {
    /// A range of 0 would never see a neighbour, so it is raised to 1.
    pub fn new(range: u8) -> Self {
        Self { range: range.max(1) }
    }

    /// Cells that would be evaluated, in scan order
    pub fn candidates<'a>(&self, board: &'a Board) -> impl Iterator<Item = Pos> + 'a {
        let range = self.range;
        board
            .empty_cells()
            .filter(move |&pos| board.has_neighbor(pos, range))
    }

    pub fn search(&self, board: &Board, color: Stone) -> SearchResult {
        let mut best: Option<(Pos, f64)> = None;
        let mut candidates = 0u32;

        for pos in self.candidates(board) {
            candidates += 1;
            let score = evaluate_position(board, pos, color);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        match best {
            Some((pos, score)) => SearchResult {
                best_move: Some(pos),
                score,
                candidates,
            },
            None => {
                // Nothing to react to: open in the center if it is free
                let center = Pos::center();
                SearchResult {
                    best_move: board.is_empty(center).then_some(center),
                    score: 0.0,
                    candidates,
                }
            }
        }
    }
}

impl Default for GreedySearcher {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_plays_center() {
        let board = Board::new();
        let result = GreedySearcher::default().search(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.candidates, 0);
    }

    #[test]
    fn test_single_stone_candidates() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
        let searcher = GreedySearcher::default();
        let cells: Vec<Pos> = searcher.candidates(&board).collect();
        assert_eq!(cells.len(), 24);
        assert!(cells.iter().all(|p| p.chebyshev(Pos::new(7, 7)) <= 2));

        let result = searcher.search(&board, Stone::White);
        assert_eq!(result.candidates, 24);
        let pos = result.best_move.unwrap();
        assert!(cells.contains(&pos));
    }

    #[test]
    fn test_tie_break_is_row_major() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
        // The eight adjacent cells all score the same; (6, 6) comes first
        let result = GreedySearcher::default().search(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(6, 6)));
    }

    #[test]
    fn test_takes_winning_move() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(2, c), Stone::White).unwrap();
        }
        board.place_stone(Pos::new(2, 2), Stone::Black).unwrap();
        board.place_stone(Pos::new(10, 10), Stone::Black).unwrap();
        let result = GreedySearcher::default().search(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(2, 7)));
        assert!(result.score >= 100_000.0 * 1.1);
    }

    #[test]
    fn test_blocks_open_four() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(9, c), Stone::Black).unwrap();
        }
        board.place_stone(Pos::new(0, 0), Stone::White).unwrap();
        let pos = GreedySearcher::default()
            .search(&board, Stone::White)
            .best_move
            .unwrap();
        assert!(pos == Pos::new(9, 4) || pos == Pos::new(9, 9));
    }

    #[test]
    fn test_never_picks_far_cells() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black).unwrap();
        board.place_stone(Pos::new(14, 14), Stone::White).unwrap();
        let result = GreedySearcher::default().search(&board, Stone::White);
        let pos = result.best_move.unwrap();
        assert!(board.is_empty(pos));
        assert!(board.has_neighbor(pos, 2));
    }

    #[test]
    fn test_zero_range_still_finds_moves() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
        let searcher = GreedySearcher::new(0);
        assert_eq!(searcher.candidates(&board).count(), 8);
        let pos = searcher.search(&board, Stone::White).best_move.unwrap();
        assert_eq!(pos.chebyshev(Pos::new(7, 7)), 1);
    }
}
