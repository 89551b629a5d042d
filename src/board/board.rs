//! Board structure with checked placement and removal

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::MoveRejection;

/// Row-major copy of every cell, handed to renderers
pub type BoardSnapshot = [[Stone; BOARD_SIZE]; BOARD_SIZE];

/// Game board
///
/// Cells only change through [`Board::place_stone`] and [`Board::remove_stone`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone on an empty, on-board cell.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveRejection> {
        if !pos.in_bounds() {
            return Err(MoveRejection::OutOfRange {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        if !self.is_empty(pos) {
            return Err(MoveRejection::Occupied(pos));
        }
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => return Err(MoveRejection::EmptyStone),
        }
        Ok(())
    }

    /// Remove a stone, returning its color.
    pub fn remove_stone(&mut self, pos: Pos) -> Result<Stone, MoveRejection> {
        if !pos.in_bounds() {
            return Err(MoveRejection::OutOfRange {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        let stone = self.get(pos);
        if stone == Stone::Empty {
            return Err(MoveRejection::EmptyCell(pos));
        }
        self.black.clear(pos);
        self.white.clear(pos);
        Ok(stone)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Any stone within Chebyshev distance `range` of `pos`
    pub fn has_neighbor(&self, pos: Pos, range: u8) -> bool {
        let range = range as i32;
        for dr in -range..=range {
            for dc in -range..=range {
                if let Some(p) = pos.offset(dr, dc, 1) {
                    if !self.is_empty(p) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Occupied cells among the 8 adjacent cells
    pub fn count_neighbors(&self, pos: Pos) -> u32 {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(p) = pos.offset(dr, dc, 1) {
                    if !self.is_empty(p) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&p| self.is_empty(p))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut grid = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        for stone in [Stone::Black, Stone::White] {
            if let Some(bb) = self.stones(stone) {
                for pos in bb.iter_ones() {
                    grid[pos.row as usize][pos.col as usize] = stone;
                }
            }
        }
        grid
    }
}
