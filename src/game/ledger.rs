//! Ordered record of played moves

use crate::board::{Board, Pos, Stone};
use crate::error::MoveRejection;

/// A played move. `index` is 1-based play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
    pub index: usize,
}

/// Moves in play order
///
/// The ledger and the board change together: every recorded move is a stone
/// on the board, and undoing a move removes that stone. The number of moves
/// always equals the number of stones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLedger {
    moves: Vec<Move>,
}

impl MoveLedger {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(crate::board::TOTAL_CELLS),
        }
    }

    /// Place `stone` at `pos` and append the move.
    ///
    /// Nothing is recorded if the board refuses the stone.
    pub fn record(&mut self, board: &mut Board, pos: Pos, stone: Stone) -> Result<Move, MoveRejection> {
        board.place_stone(pos, stone)?;
        let mv = Move {
            pos,
            stone,
            index: self.moves.len() + 1,
        };
        self.moves.push(mv);
        Ok(mv)
    }

    /// Take back up to `count` moves, most recent first, clearing their cells.
    ///
    /// Returns the moves removed. All-or-nothing: if any of the cells no
    /// longer holds its recorded stone, neither the ledger nor the board
    /// changes.
    pub fn undo_last(&mut self, count: usize, board: &mut Board) -> Result<Vec<Move>, MoveRejection> {
        let keep = self.moves.len().saturating_sub(count);
        if let Some(stale) = self.moves[keep..].iter().find(|m| board.get(m.pos) != m.stone) {
            return Err(MoveRejection::EmptyCell(stale.pos));
        }

        let mut undone = Vec::with_capacity(self.moves.len() - keep);
        while self.moves.len() > keep {
            let Some(last) = self.moves.pop() else {
                break;
            };
            board.remove_stone(last.pos)?;
            undone.push(last);
        }
        Ok(undone)
    }

    /// Color of the most recent move
    #[inline]
    pub fn last_player(&self) -> Option<Stone> {
        self.moves.last().map(|m| m.stone)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves played by one color
    pub fn count_by(&self, stone: Stone) -> usize {
        self.moves.iter().filter(|m| m.stone == stone).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assigns_indices() {
        let mut board = Board::new();
        let mut ledger = MoveLedger::new();
        let a = ledger.record(&mut board, Pos::new(7, 7), Stone::Black).unwrap();
        let b = ledger.record(&mut board, Pos::new(7, 8), Stone::White).unwrap();
        assert_eq!(a.index, 1);
        assert_eq!(b.index, 2);
        assert_eq!(ledger.last_player(), Some(Stone::White));
        assert_eq!(board.stone_count() as usize, ledger.len());
    }

    #[test]
    fn test_rejected_move_not_recorded() {
        let mut board = Board::new();
        let mut ledger = MoveLedger::new();
        ledger.record(&mut board, Pos::new(1, 1), Stone::Black).unwrap();
        let err = ledger.record(&mut board, Pos::new(1, 1), Stone::White);
        assert_eq!(err, Err(MoveRejection::Occupied(Pos::new(1, 1))));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_undo_last_reverse_order() {
        let mut board = Board::new();
        let mut ledger = MoveLedger::new();
        for (i, c) in (0..4).enumerate() {
            let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
            ledger.record(&mut board, Pos::new(0, c), stone).unwrap();
        }
        let undone = ledger.undo_last(2, &mut board).unwrap();
        assert_eq!(
            undone.iter().map(|m| m.pos).collect::<Vec<_>>(),
            vec![Pos::new(0, 3), Pos::new(0, 2)]
        );
        assert_eq!(ledger.len(), 2);
        assert!(board.is_empty(Pos::new(0, 3)));
        assert!(board.is_empty(Pos::new(0, 2)));
        assert_eq!(board.get(Pos::new(0, 1)), Stone::White);
    }

    #[test]
    fn test_undo_more_than_recorded() {
        let mut board = Board::new();
        let mut ledger = MoveLedger::new();
        ledger.record(&mut board, Pos::new(5, 5), Stone::Black).unwrap();
        let undone = ledger.undo_last(2, &mut board).unwrap();
        assert_eq!(undone.len(), 1);
        assert!(ledger.is_empty());
        assert!(board.is_board_empty());
        assert_eq!(ledger.last_player(), None);
        assert!(ledger.undo_last(1, &mut board).unwrap().is_empty());
    }

    #[test]
    fn test_undo_out_of_sync_board_keeps_move() {
        let mut board = Board::new();
        let mut ledger = MoveLedger::new();
        ledger.record(&mut board, Pos::new(5, 5), Stone::Black).unwrap();
        // Clear the cell behind the ledger's back
        board.remove_stone(Pos::new(5, 5)).unwrap();
        assert_eq!(
            ledger.undo_last(1, &mut board),
            Err(MoveRejection::EmptyCell(Pos::new(5, 5)))
        );
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_undo_failure_leaves_everything_in_place() {
        let mut board = Board::new();
        let mut ledger = MoveLedger::new();
        ledger.record(&mut board, Pos::new(0, 0), Stone::Black).unwrap();
        ledger.record(&mut board, Pos::new(0, 1), Stone::White).unwrap();
        ledger.record(&mut board, Pos::new(0, 2), Stone::Black).unwrap();
        // The older of the two moves to undo is out of sync
        board.remove_stone(Pos::new(0, 1)).unwrap();

        assert_eq!(
            ledger.undo_last(2, &mut board),
            Err(MoveRejection::EmptyCell(Pos::new(0, 1)))
        );
        assert_eq!(ledger.len(), 3);
        assert_eq!(board.get(Pos::new(0, 2)), Stone::Black);
        assert_eq!(ledger.last_player(), Some(Stone::Black));
    }

    #[test]
    fn test_count_by_color() {
        let mut board = Board::new();
        let mut ledger = MoveLedger::new();
        ledger.record(&mut board, Pos::new(0, 0), Stone::Black).unwrap();
        ledger.record(&mut board, Pos::new(0, 1), Stone::White).unwrap();
        ledger.record(&mut board, Pos::new(0, 2), Stone::Black).unwrap();
        assert_eq!(ledger.count_by(Stone::Black), 2);
        assert_eq!(ledger.count_by(Stone::White), 1);
    }
}
