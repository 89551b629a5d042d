//! State of a single game

use crate::board::{Board, Pos, Stone};
use crate::error::MoveRejection;
use crate::rules::find_five_line_at_pos;

use super::ledger::{Move, MoveLedger};
use super::GameMode;

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Five or more in a row; `line` is ordered along its axis
    Win { winner: Stone, line: Vec<Pos> },
    /// Board filled without a five
    Draw,
}

/// One game: board, move ledger, side to move and result.
///
/// Play is `InProgress` until an outcome is set; a finished session never
/// resumes.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    ledger: MoveLedger,
    current: Stone,
    mode: GameMode,
    outcome: Option<Outcome>,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            ledger: MoveLedger::new(),
            current: Stone::Black,
            mode,
            outcome: None,
        }
    }

    /// Play the side to move at `pos`.
    ///
    /// On success the win check runs from `pos`; the turn passes only if the
    /// game goes on.
    pub fn play(&mut self, pos: Pos) -> Result<Move, MoveRejection> {
        if self.is_terminal() {
            return Err(MoveRejection::GameOver);
        }
        let mv = self.ledger.record(&mut self.board, pos, self.current)?;

        if let Some(line) = find_five_line_at_pos(&self.board, pos, mv.stone) {
            self.outcome = Some(Outcome::Win {
                winner: mv.stone,
                line,
            });
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.current = self.current.opponent();
        }
        Ok(mv)
    }

    /// Take back up to `count` moves. The side to move becomes the opponent
    /// of the last remaining move, or Black on an empty board.
    pub fn undo(&mut self, count: usize) -> Result<Vec<Move>, MoveRejection> {
        if self.is_terminal() {
            return Err(MoveRejection::GameOver);
        }
        let undone = self.ledger.undo_last(count, &mut self.board)?;
        self.current = self
            .ledger
            .last_player()
            .map_or(Stone::Black, Stone::opponent);
        Ok(undone)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Stone> {
        match &self.outcome {
            Some(Outcome::Win { winner, .. }) => Some(*winner),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        match &self.outcome {
            Some(Outcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }
}
