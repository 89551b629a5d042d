//! Gomoku on a 15x15 board
//!
//! Black moves first and the first player to complete five or more stones in
//! a row (horizontal, vertical or either diagonal) wins. There are no captures
//! and no forbidden moves; a full board without a five is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Five-in-a-row detection and winning line extraction
//! - [`eval`]: One-ply line heuristic used by the Hard AI
//! - [`search`]: Easy (neighbour count) and Hard (greedy) move selection
//! - [`engine`]: AI engine dispatching on difficulty
//! - [`game`]: Move ledger, session state and the controller a UI drives
//! - [`config`]: TOML configuration
//! - `ui`: egui front end (behind the `gui` feature)
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameConfig, GameController, GameMode, Stone};
//!
//! let mut config = GameConfig::default();
//! config.default_mode = GameMode::AiHard;
//! config.ai.think_delay_ms = 0;
//!
//! let mut game = GameController::new(config)?;
//! assert!(game.attempt_move(7, 7));
//!
//! // White is the computer; block until it has replied
//! game.wait_for_ai();
//! assert_eq!(game.move_list().len(), 2);
//! assert_eq!(game.current_player(), Stone::Black);
//! # Ok::<(), gomoku::ConfigError>(())
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
#[cfg(feature = "gui")]
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{AiConfig, GameConfig};
pub use engine::{AIEngine, Difficulty, MoveResult, SearchType};
pub use error::{ConfigError, GameError, MoveRejection};
pub use game::{GameController, GameEvent, GameMode, Move, Outcome};
