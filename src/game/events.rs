//! Notifications for the UI

use crate::board::{Pos, Stone};

use super::controller::AiTicket;
use super::GameMode;

/// Something the UI may want to render or play a sound for.
///
/// Events queue inside the controller until drained with
/// [`GameController::drain_events`](super::GameController::drain_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    StonePlaced {
        pos: Pos,
        stone: Stone,
        /// 1-based move number
        index: usize,
    },
    /// `winner` is None for a draw, and `line` is then empty
    GameEnded {
        winner: Option<Stone>,
        line: Vec<Pos>,
    },
    /// Cells cleared by an undo, most recent first
    MovesUndone { cells: Vec<Pos> },
    AiThinkingStarted { ticket: AiTicket },
    AiThinkingEnded {
        ticket: AiTicket,
        best_move: Option<Pos>,
    },
    GameReset { mode: GameMode },
}
