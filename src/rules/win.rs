//! Five-in-a-row detection
//!
//! Five or more contiguous stones of one color on any axis win. There is no
//! overline restriction and no capture rule.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Number of contiguous `color` stones from `pos` (exclusive) along one direction.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut len = 0;
    while let Some(p) = pos.offset(dr, dc, len as i32 + 1) {
        if board.get(p) != color {
            break;
        }
        len += 1;
    }
    len
}

/// Contiguous line through `pos` along one axis, ordered from the negative end.
/// `pos` itself is always included.
pub fn line_through(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> Vec<Pos> {
    let back = run_length(board, pos, -dr, -dc, color) as i32;
    let forward = run_length(board, pos, dr, dc, color) as i32;
    (-back..=forward)
        .filter_map(|i| pos.offset(dr, dc, i))
        .collect()
}

/// Winning line through a just-placed stone.
///
/// Axes are tried in [`DIRECTIONS`] order and the first one reaching five
/// is returned whole (six stones in a row yield six positions).
pub fn find_five_line_at_pos(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if !color.is_player() || board.get(pos) != color {
        return None;
    }
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| line_through(board, pos, dr, dc, color))
        .find(|line| line.len() >= WIN_LENGTH)
}
