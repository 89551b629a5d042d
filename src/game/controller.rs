//! Game controller: the single entry point for a UI
//!
//! The controller owns the [`GameSession`] and is the only code that mutates
//! it. Human input arrives through [`GameController::attempt_move`],
//! [`GameController::undo`] and [`GameController::reset`]; anything invalid is
//! dropped and leaves the game untouched.
//!
//! When the computer is to move, its search runs on a worker thread after a
//! short pacing delay and the result comes back over a channel. The UI calls
//! [`GameController::poll_ai`] every frame (or [`GameController::wait_for_ai`]
//! to block). Each scheduled AI turn carries an [`AiTicket`]; a reply whose
//! ticket no longer matches the game (after a reset or mode switch) is
//! discarded.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::board::{Board, BoardSnapshot, Pos, Stone};
use crate::config::{AiConfig, GameConfig};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{ConfigError, GameError, MoveRejection};
use crate::search::GreedySearcher;

use super::events::GameEvent;
use super::ledger::Move;
use super::session::{GameSession, Outcome};
use super::GameMode;

/// Identifies one scheduled AI turn.
///
/// A ticket is current only within the same game (no reset since it was
/// issued) and at the same move number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AiTicket {
    generation: u64,
    ply: usize,
}

impl AiTicket {
    /// Game counter at the time the turn was scheduled
    pub fn generation(self) -> u64 {
        self.generation
    }

    /// Moves on the board when the turn was scheduled
    pub fn ply(self) -> usize {
        self.ply
    }
}

/// Worker thread reply
struct AiReply {
    ticket: AiTicket,
    result: MoveResult,
}

/// AI computation state
enum AiState {
    Idle,
    Thinking {
        ticket: AiTicket,
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// Owns the game and sequences human and AI turns.
pub struct GameController {
    session: GameSession,
    config: GameConfig,
    /// Bumped by every reset; invalidates outstanding tickets
    generation: u64,
    ai_state: AiState,
    /// Source of per-turn engine seeds
    seeds: StdRng,
    events: Vec<GameEvent>,
    last_ai_result: Option<MoveResult>,
}

impl GameController {
    /// Controller for a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: GameConfig) -> Self {
        let seeds = match config.ai.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            session: GameSession::new(config.default_mode),
            config,
            generation: 0,
            ai_state: AiState::Idle,
            seeds,
            events: Vec::new(),
            last_ai_result: None,
        }
    }

    /// Start a new game in `mode`. Any pending AI move is dropped.
    pub fn reset(&mut self, mode: GameMode) {
        self.generation += 1;
        if self.is_ai_thinking() {
            debug!("discarding pending AI move");
        }
        self.ai_state = AiState::Idle;
        self.session = GameSession::new(mode);
        self.last_ai_result = None;
        self.events.push(GameEvent::GameReset { mode });
        info!(%mode, "new game");
    }

    /// Switch mode. Always starts a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.reset(mode);
    }

    /// Place the human player's stone, or explain why not.
    pub fn try_move(&mut self, row: i32, col: i32) -> Result<(), GameError> {
        if self.session.is_terminal() {
            return Err(MoveRejection::GameOver.into());
        }
        if self.is_ai_thinking() {
            return Err(MoveRejection::AiThinking.into());
        }
        if !self.is_human_turn() {
            return Err(MoveRejection::WrongTurn.into());
        }
        let pos = Pos::try_new(row, col).ok_or(MoveRejection::OutOfRange { row, col })?;
        self.apply_move(pos)
    }

    /// Place the human player's stone. Invalid input is ignored; returns
    /// whether a stone was placed.
    pub fn attempt_move(&mut self, row: i32, col: i32) -> bool {
        match self.try_move(row, col) {
            Ok(()) => true,
            Err(err) => {
                debug!(row, col, %err, "move ignored");
                false
            }
        }
    }

    /// Take back the last move (PvP) or the last AI reply and the human move
    /// before it (AI modes). Returns the moves removed, most recent first.
    pub fn try_undo(&mut self) -> Result<Vec<Move>, GameError> {
        if self.session.is_terminal() {
            return Err(MoveRejection::GameOver.into());
        }
        if self.is_ai_thinking() {
            return Err(MoveRejection::AiThinking.into());
        }
        let count = self.session.mode().undo_count();
        let undone = self.session.undo(count)?;
        if !undone.is_empty() {
            self.events.push(GameEvent::MovesUndone {
                cells: undone.iter().map(|m| m.pos).collect(),
            });
            debug!(count = undone.len(), "moves undone");
        }
        if self.is_ai_turn() {
            self.start_ai_thinking();
        }
        Ok(undone)
    }

    /// Undo, ignoring requests that cannot be honoured. Returns whether
    /// anything was taken back.
    pub fn undo(&mut self) -> bool {
        match self.try_undo() {
            Ok(undone) => !undone.is_empty(),
            Err(err) => {
                debug!(%err, "undo ignored");
                false
            }
        }
    }

    /// Apply a finished AI reply if one is ready. Returns true when a reply
    /// was consumed.
    pub fn poll_ai(&mut self) -> bool {
        let reply = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(reply) => reply,
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => {
                    self.abandon_ai();
                    return false;
                }
            },
            AiState::Idle => return false,
        };
        self.finish_ai(reply);
        true
    }

    /// Block until the pending AI reply arrives and apply it.
    pub fn wait_for_ai(&mut self) -> bool {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, .. } => receiver.recv(),
            AiState::Idle => return false,
        };
        match received {
            Ok(reply) => {
                self.finish_ai(reply);
                true
            }
            Err(_) => {
                self.abandon_ai();
                false
            }
        }
    }

    /// Play an AI move through the normal placement path, but only if
    /// `ticket` is still current and `pos` is playable. A refused move leaves
    /// any pending AI turn in place.
    pub fn apply_ai_move(&mut self, ticket: AiTicket, pos: Pos) -> bool {
        if !self.is_current(ticket) {
            debug!(
                generation = ticket.generation,
                ply = ticket.ply,
                "discarding stale AI move"
            );
            return false;
        }
        if !self.is_ai_turn() || !pos.in_bounds() || !self.session.board().is_empty(pos) {
            debug!(at = %pos, "AI move not playable");
            return false;
        }
        if let AiState::Thinking { ticket: pending, .. } = &self.ai_state {
            if *pending == ticket {
                self.ai_state = AiState::Idle;
                self.events.push(GameEvent::AiThinkingEnded {
                    ticket,
                    best_move: Some(pos),
                });
            }
        }
        match self.apply_move(pos) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "AI move rejected");
                false
            }
        }
    }

    fn is_current(&self, ticket: AiTicket) -> bool {
        ticket.generation == self.generation && ticket.ply == self.session.ledger().len()
    }

    /// Shared placement path for human and AI moves
    fn apply_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let mv = self.session.play(pos)?;
        self.events.push(GameEvent::StonePlaced {
            pos: mv.pos,
            stone: mv.stone,
            index: mv.index,
        });
        debug!(stone = mv.stone.name(), at = %mv.pos.notation(), index = mv.index, "stone placed");

        if let Some(outcome) = self.session.outcome() {
            let (winner, line) = match outcome {
                Outcome::Win { winner, line } => (Some(*winner), line.clone()),
                Outcome::Draw => (None, Vec::new()),
            };
            info!(winner = ?winner, moves = mv.index, "game over");
            self.events.push(GameEvent::GameEnded { winner, line });
        } else if self.is_ai_turn() {
            self.start_ai_thinking();
        }
        Ok(())
    }

    /// Schedule the AI search on a worker thread
    fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Some(difficulty) = self.session.mode().ai_difficulty() else {
            return;
        };

        let ticket = AiTicket {
            generation: self.generation,
            ply: self.session.ledger().len(),
        };
        let board = self.session.board().clone();
        let color = self.session.current_player();
        let ai_config = AiConfig {
            seed: Some(self.seeds.random()),
            ..self.config.ai.clone()
        };
        let delay = Duration::from_millis(self.config.ai.think_delay_ms);

        let (tx, rx) = channel();

        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let mut engine = AIEngine::with_config(difficulty, &ai_config);
            let result = engine.get_move_with_stats(&board, color);
            // The receiver is gone if the game was reset meanwhile
            let _ = tx.send(AiReply { ticket, result });
        });

        self.ai_state = AiState::Thinking {
            ticket,
            receiver: rx,
            start_time: Instant::now(),
        };
        self.events.push(GameEvent::AiThinkingStarted { ticket });
        debug!(?difficulty, generation = ticket.generation, ply = ticket.ply, "AI thinking");
    }

    fn finish_ai(&mut self, reply: AiReply) {
        let AiReply { ticket, result } = reply;
        self.ai_state = AiState::Idle;
        self.events.push(GameEvent::AiThinkingEnded {
            ticket,
            best_move: result.best_move,
        });
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        let applied = match best_move {
            Some(pos) => self.apply_ai_move(ticket, pos),
            None => {
                warn!("AI could not find a move");
                false
            }
        };
        if !applied {
            self.recover_ai_turn();
        }
    }

    /// Worker vanished without replying
    fn abandon_ai(&mut self) {
        if let AiState::Thinking { ticket, .. } = self.ai_state {
            warn!(generation = ticket.generation, "AI worker disconnected");
            self.ai_state = AiState::Idle;
            self.events.push(GameEvent::AiThinkingEnded {
                ticket,
                best_move: None,
            });
            self.recover_ai_turn();
        }
    }

    /// The computer's turn produced nothing usable: play a greedy move (or
    /// the first empty cell) now so the game never stalls on White.
    fn recover_ai_turn(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let fallback = {
            let board = self.session.board();
            GreedySearcher::default()
                .search(board, self.session.current_player())
                .best_move
                .filter(|&pos| board.is_empty(pos))
                .or_else(|| board.empty_cells().next())
        };
        let Some(pos) = fallback else {
            return;
        };
        warn!(at = %pos.notation(), "playing fallback AI move");
        if let Err(err) = self.apply_move(pos) {
            warn!(%err, "fallback AI move rejected");
        }
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        self.session
            .mode()
            .is_human(self.session.current_player())
    }

    /// Check if the computer is to move in a live game
    pub fn is_ai_turn(&self) -> bool {
        !self.session.is_terminal()
            && self.session.mode().ai_color() == Some(self.session.current_player())
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Ticket of the AI turn in flight
    pub fn pending_ticket(&self) -> Option<AiTicket> {
        match &self.ai_state {
            AiState::Thinking { ticket, .. } => Some(*ticket),
            AiState::Idle => None,
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.session.mode()
    }

    pub fn current_player(&self) -> Stone {
        self.session.current_player()
    }

    pub fn is_terminal(&self) -> bool {
        self.session.is_terminal()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.session.outcome()
    }

    pub fn winner(&self) -> Option<Stone> {
        self.session.winner()
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.session.winning_line()
    }

    pub fn move_list(&self) -> &[Move] {
        self.session.ledger().moves()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.session.ledger().last_move()
    }

    pub fn board(&self) -> &Board {
        self.session.board()
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.session.board().snapshot()
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::from_valid(GameConfig::default())
    }
}
