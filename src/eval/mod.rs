//! Evaluation module for Gomoku positions
//!
//! Scores single candidate cells by the lines they would form:
//! - Line shape (count, open ends) per axis
//! - Attack (own lines) weighted slightly above defense (opponent lines)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_line, evaluate_position, line_scores, LineEval};
pub use patterns::{line_score, PatternScore, OFFENSE_BIAS};
