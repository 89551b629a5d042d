//! Search module for Gomoku AI
//!
//! Contains:
//! - Neighbor search (Easy): random or crowd-seeking picks
//! - Greedy search (Hard): one-ply heuristic over nearby cells

pub mod greedy;
pub mod neighbor;

pub use greedy::{GreedySearcher, SearchResult, DEFAULT_SEARCH_RANGE};
pub use neighbor::{NeighborPick, NeighborSearcher, DEFAULT_RANDOM_CHANCE};
