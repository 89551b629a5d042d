//! Game rules for free-style Gomoku
//!
//! Standard five-in-a-row on a 15x15 board: Black moves first, five or more
//! contiguous stones win, no forbidden moves and no captures.

pub mod win;

pub use win::{find_five_line_at_pos, line_through, DIRECTIONS, WIN_LENGTH};
