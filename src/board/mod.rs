//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, BoardSnapshot};

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Column letters used in move notation
const COLUMN_LABELS: &[u8; BOARD_SIZE] = b"ABCDEFGHIJKLMNO";

/// Stone colors
///
/// `Empty` is the value of an unoccupied cell; only `Black` and `White`
/// ever take a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for `Black` and `White`
    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the core.
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        Self::is_valid(row, col).then(|| Self::new(row as u8, col as u8))
    }

    /// The center point, first move of the Hard AI on an empty board
    #[inline]
    pub fn center() -> Self {
        let mid = (BOARD_SIZE / 2) as u8;
        Self::new(mid, mid)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// True if both coordinates are on the board
    #[inline]
    pub fn in_bounds(self) -> bool {
        Self::is_valid(self.row as i32, self.col as i32)
    }

    /// Step `dist` cells along `(dr, dc)`, or None when leaving the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, dist: i32) -> Option<Pos> {
        Self::try_new(self.row as i32 + dr * dist, self.col as i32 + dc * dist)
    }

    /// Chebyshev (king-move) distance
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Human-readable label: column letter, then row counted from the bottom
    /// (`(0, 0)` is "A15", `(14, 14)` is "O1").
    pub fn notation(self) -> String {
        let col = COLUMN_LABELS[self.col as usize] as char;
        format!("{}{}", col, BOARD_SIZE - self.row as usize)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
