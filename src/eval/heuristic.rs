//! Candidate-cell evaluation for the Hard AI
//!
//! Each empty cell is scored on its own, as if the mover had just played
//! there. Both colors are measured through the cell: the mover's lines are
//! the attack, the opponent's lines are what the move would block.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{line_score, OFFENSE_BIAS};

/// Shape of the line through a candidate cell on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineEval {
    /// Stones in the line, the candidate included
    pub count: u32,
    /// Sides where a non-empty run ends on an empty cell
    pub open_ends: u32,
    /// An opposing stone sits directly next to the candidate.
    /// Recorded but not used in scoring.
    pub blocked: bool,
}

impl LineEval {
    #[inline]
    pub fn score(&self) -> i32 {
        line_score(self.count, self.open_ends)
    }
}

/// Measure the `color` line through `pos` along `(dr, dc)` as if `pos` held `color`.
///
/// The board is not modified; `pos` itself is never read.
pub fn evaluate_line(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> LineEval {
    let mut eval = LineEval {
        count: 1,
        ..LineEval::default()
    };

    for sign in [1, -1] {
        let mut consecutive = 0u32;
        let mut step = 1;
        while let Some(p) = pos.offset(dr * sign, dc * sign, step) {
            let cell = board.get(p);
            if cell == color {
                consecutive += 1;
            } else if cell == Stone::Empty {
                if consecutive > 0 {
                    eval.open_ends += 1;
                }
                break;
            } else {
                if consecutive == 0 {
                    eval.blocked = true;
                }
                break;
            }
            step += 1;
        }
        eval.count += consecutive;
    }

    eval
}

/// Sum of the four axis scores for `color` through `pos`.
pub fn line_scores(board: &Board, pos: Pos, color: Stone) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| evaluate_line(board, pos, dr, dc, color).score())
        .sum()
}

/// Score an empty cell for `color` to move.
///
/// `own * 1.1 + opponent`, so attack wins ties against equal defense.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, color: Stone) -> f64 {
    let own = line_scores(board, pos, color);
    let opponent = line_scores(board, pos, color.opponent());
    own as f64 * OFFENSE_BIAS + opponent as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(r, c) in black {
            board.place_stone(Pos::new(r, c), Stone::Black).unwrap();
        }
        for &(r, c) in white {
            board.place_stone(Pos::new(r, c), Stone::White).unwrap();
        }
        board
    }

    #[test]
    fn test_lone_candidate() {
        let board = Board::new();
        let eval = evaluate_line(&board, Pos::new(7, 7), 0, 1, Stone::White);
        assert_eq!(
            eval,
            LineEval {
                count: 1,
                open_ends: 0,
                blocked: false
            }
        );
        assert_eq!(eval.score(), 1);
        // Four axes of 1, for each color
        assert!((evaluate_position(&board, Pos::new(7, 7), Stone::White) - 8.4).abs() < 1e-9);
    }

    #[test]
    fn test_gap_fill_makes_open_four() {
        // _ B B . B _ with the candidate in the gap
        let board = board_with(&[(7, 7), (7, 8), (7, 10)], &[]);
        let eval = evaluate_line(&board, Pos::new(7, 9), 0, 1, Stone::Black);
        assert_eq!(eval.count, 4);
        assert_eq!(eval.open_ends, 2);
        assert_eq!(eval.score(), PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_completing_five_scores_five() {
        let board = board_with(&[(7, 7), (7, 8), (7, 9), (7, 10)], &[]);
        for col in [6, 11] {
            let eval = evaluate_line(&board, Pos::new(7, col), 0, 1, Stone::Black);
            assert_eq!(eval.count, 5);
            assert_eq!(eval.score(), PatternScore::FIVE);
        }
    }

    #[test]
    fn test_extending_from_end_counts_one_open_end() {
        // The side facing away from the run has no stones, so it is not an open end
        let board = board_with(&[(7, 7), (7, 8), (7, 9)], &[]);
        let eval = evaluate_line(&board, Pos::new(7, 10), 0, 1, Stone::Black);
        assert_eq!(eval.count, 4);
        assert_eq!(eval.open_ends, 1);
        assert_eq!(eval.score(), PatternScore::CLOSED_FOUR);
    }

    #[test]
    fn test_run_ending_on_opponent_is_closed() {
        let board = board_with(&[(3, 3), (4, 4)], &[(5, 5)]);
        // Candidate (2, 2): SE run of two ends on White
        let eval = evaluate_line(&board, Pos::new(2, 2), 1, 1, Stone::Black);
        assert_eq!(eval.count, 3);
        assert_eq!(eval.open_ends, 0);
        assert!(!eval.blocked);
        assert_eq!(eval.score(), 3);
    }

    #[test]
    fn test_blocked_flag_does_not_change_score() {
        // W . B B _ with the candidate between the white stone and the run
        let board = board_with(&[(7, 8), (7, 9)], &[(7, 6)]);
        let eval = evaluate_line(&board, Pos::new(7, 7), 0, 1, Stone::Black);
        assert!(eval.blocked);
        assert_eq!(eval.count, 3);
        assert_eq!(eval.open_ends, 1);
        assert_eq!(eval.score(), PatternScore::CLOSED_THREE);
    }

    #[test]
    fn test_board_edge_is_not_open() {
        let board = board_with(&[(0, 1), (0, 2)], &[]);
        let eval = evaluate_line(&board, Pos::new(0, 0), 0, 1, Stone::Black);
        assert_eq!(eval.count, 3);
        assert_eq!(eval.open_ends, 1);
        assert!(!eval.blocked);
    }

    #[test]
    fn test_position_combines_attack_and_defense() {
        // Black open three on row 7; White has nothing nearby
        let board = board_with(&[(7, 7), (7, 8), (7, 9)], &[]);
        let pos = Pos::new(7, 6);
        let own = line_scores(&board, pos, Stone::White);
        let opp = line_scores(&board, pos, Stone::Black);
        assert_eq!(own, 4);
        assert_eq!(opp, PatternScore::CLOSED_FOUR + 3);
        let expected = own as f64 * 1.1 + opp as f64;
        assert!((evaluate_position(&board, pos, Stone::White) - expected).abs() < 1e-9);
    }
}
