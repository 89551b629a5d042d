//! AI engine selecting moves for the computer player
//!
//! Two difficulties are available:
//!
//! 1. **Easy**: 30% of the time a uniformly random empty cell, otherwise a
//!    random pick among the cells with the most adjacent stones
//! 2. **Hard**: the best cell by the one-ply line heuristic, restricted to cells
//!    within two steps of an existing stone; the center on an empty board
//!
//! The engine only reads the board. Callers place the returned move.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::new(Difficulty::Hard);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Pos, Stone};
use crate::config::AiConfig;
use crate::search::{GreedySearcher, NeighborSearcher};

/// AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Hard,
}

/// Which branch of the engine produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, Hard opens in the center
    Center,
    /// Best heuristic score (Hard)
    Heuristic,
    /// Most adjacent stones (Easy)
    Neighbor,
    /// Uniform random pick (Easy)
    Random,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Heuristic score (Hard) or neighbour count (Easy)
    pub score: f64,
    /// Branch that produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of cells considered
    pub candidates: u32,
}

impl MoveResult {
    #[inline]
    fn none(search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            search_type,
            time_ms,
            candidates: 0,
        }
    }
}

/// Move selector for the computer player.
pub struct AIEngine {
    difficulty: Difficulty,
    /// Easy-mode searcher, owns the RNG
    neighbor: NeighborSearcher,
    /// Hard-mode searcher
    greedy: GreedySearcher,
}

impl AIEngine {
    /// Engine with default tuning and an OS-seeded RNG.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_config(difficulty, &AiConfig::default())
    }

    /// Engine tuned by `config`; seeded when `config.seed` is set.
    #[must_use]
    pub fn with_config(difficulty: Difficulty, config: &AiConfig) -> Self {
        let neighbor = match config.seed {
            Some(seed) => NeighborSearcher::with_seed(config.easy_random_chance, seed),
            None => NeighborSearcher::new(config.easy_random_chance),
        };
        Self {
            difficulty,
            neighbor,
            greedy: GreedySearcher::new(config.hard_search_range),
        }
    }

    /// Engine with a fixed RNG seed and otherwise default tuning.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        let config = AiConfig {
            seed: Some(seed),
            ..AiConfig::default()
        };
        Self::with_config(difficulty, &config)
    }

    /// Get the best move for `color`, or `None` on a full board.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the move with search statistics.
    #[must_use]
    #[instrument(level = "debug", skip(self, board), fields(difficulty = ?self.difficulty))]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let result = match self.difficulty {
            Difficulty::Easy => match self.neighbor.search(board) {
                Some(pick) => MoveResult {
                    best_move: Some(pick.pos),
                    score: pick.score as f64,
                    search_type: if pick.random {
                        SearchType::Random
                    } else {
                        SearchType::Neighbor
                    },
                    time_ms: elapsed_ms(start),
                    candidates: pick.candidates,
                },
                None => MoveResult::none(SearchType::Neighbor, elapsed_ms(start)),
            },
            Difficulty::Hard => {
                let found = self.greedy.search(board, color);
                let search_type = if found.candidates == 0 {
                    SearchType::Center
                } else {
                    SearchType::Heuristic
                };
                MoveResult {
                    best_move: found.best_move,
                    score: found.score,
                    search_type,
                    time_ms: elapsed_ms(start),
                    candidates: found.candidates,
                }
            }
        };

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            candidates = result.candidates,
            "AI move selected"
        );
        result
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_empty_board_center() {
        let mut engine = AIEngine::new(Difficulty::Hard);
        let board = Board::new();
        let result = engine.get_move_with_stats(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.search_type, SearchType::Center);
    }

    #[test]
    fn test_hard_reacts_near_stone() {
        let mut engine = AIEngine::new(Difficulty::Hard);
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black).unwrap();
        let result = engine.get_move_with_stats(&board, Stone::White);
        assert_eq!(result.search_type, SearchType::Heuristic);
        assert_eq!(result.candidates, 24);
        let pos = result.best_move.unwrap();
        assert!(pos.chebyshev(Pos::new(7, 7)) <= 2);
    }

    #[test]
    fn test_hard_blocks_four() {
        let mut engine = AIEngine::new(Difficulty::Hard);
        let mut board = Board::new();
        for c in 7..11 {
            board.place_stone(Pos::new(7, c), Stone::Black).unwrap();
        }
        for c in [0, 2, 4] {
            board.place_stone(Pos::new(0, c), Stone::White).unwrap();
        }
        let pos = engine.get_move(&board, Stone::White).unwrap();
        assert!(pos == Pos::new(7, 6) || pos == Pos::new(7, 11));
    }

    #[test]
    fn test_easy_seeded_is_deterministic() {
        let mut board = Board::new();
        board.place_stone(Pos::new(4, 4), Stone::Black).unwrap();
        let mut a = AIEngine::with_seed(Difficulty::Easy, 11);
        let mut b = AIEngine::with_seed(Difficulty::Easy, 11);
        for _ in 0..10 {
            assert_eq!(
                a.get_move(&board, Stone::White),
                b.get_move(&board, Stone::White)
            );
        }
    }

    #[test]
    fn test_easy_reports_branch() {
        let board = Board::new();
        let config = AiConfig {
            easy_random_chance: 1.0,
            seed: Some(5),
            ..AiConfig::default()
        };
        let mut engine = AIEngine::with_config(Difficulty::Easy, &config);
        let result = engine.get_move_with_stats(&board, Stone::White);
        assert_eq!(result.search_type, SearchType::Random);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_full_board_no_move() {
        let mut board = Board::new();
        for idx in 0..crate::board::TOTAL_CELLS {
            let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(Pos::from_index(idx), stone).unwrap();
        }
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let mut engine = AIEngine::with_seed(difficulty, 0);
            assert_eq!(engine.get_move(&board, Stone::White), None);
        }
    }
}
