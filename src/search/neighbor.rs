//! Easy AI: crowd around existing stones, sometimes play anywhere
//!
//! With probability `random_chance` the move is a uniform pick over all empty
//! cells. Otherwise each empty cell is scored by its occupied 8-neighbours and
//! the move is a uniform pick among the best-scored cells. On an empty board
//! every cell scores 0, so both branches are uniform.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos};

/// Default chance of ignoring the board entirely
pub const DEFAULT_RANDOM_CHANCE: f64 = 0.3;

/// Clamp into `[0, 1]`; NaN falls back to the default.
fn sanitize_chance(chance: f64) -> f64 {
    if chance.is_nan() {
        DEFAULT_RANDOM_CHANCE
    } else {
        chance.clamp(0.0, 1.0)
    }
}

/// Result of an easy-mode pick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborPick {
    pub pos: Pos,
    /// Occupied neighbours of `pos`
    pub score: u32,
    /// True if the move came from the random branch
    pub random: bool,
    /// Empty cells considered
    pub candidates: u32,
}

pub struct NeighborSearcher {
    rng: StdRng,
    random_chance: f64,
}

impl NeighborSearcher {
    pub fn new(random_chance: f64) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            random_chance: sanitize_chance(random_chance),
        }
    }

    /// Deterministic searcher for replays and tests
    pub fn with_seed(random_chance: f64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            random_chance: sanitize_chance(random_chance),
        }
    }

    /// Pick a move, or None if the board is full.
    pub fn search(&mut self, board: &Board) -> Option<NeighborPick> {
        let empty: Vec<Pos> = board.empty_cells().collect();
        if empty.is_empty() {
            return None;
        }
        let candidates = empty.len() as u32;

        if self.rng.random_bool(self.random_chance) {
            let pos = empty[self.rng.random_range(0..empty.len())];
            return Some(NeighborPick {
                pos,
                score: board.count_neighbors(pos),
                random: true,
                candidates,
            });
        }

        let scored: Vec<(Pos, u32)> = empty
            .into_iter()
            .map(|pos| (pos, board.count_neighbors(pos)))
            .collect();
        let best = scored.iter().map(|&(_, s)| s).max().unwrap_or(0);
        let top: Vec<Pos> = scored
            .iter()
            .filter(|&&(_, s)| s == best)
            .map(|&(p, _)| p)
            .collect();
        let pos = top[self.rng.random_range(0..top.len())];

        Some(NeighborPick {
            pos,
            score: best,
            random: false,
            candidates,
        })
    }
}

impl Default for NeighborSearcher {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_CHANCE)
    }
}
