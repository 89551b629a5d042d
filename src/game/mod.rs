//! Game flow: move ledger, session state and the controller a UI drives
//!
//! - [`ledger`]: ordered moves, place/undo kept in step with the board
//! - [`session`]: one game's board, ledger, turn and outcome
//! - [`controller`]: input gating, AI scheduling and events

pub mod controller;
pub mod events;
pub mod ledger;
pub mod session;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Stone;
use crate::engine::Difficulty;
use crate::error::GameError;

pub use controller::{AiTicket, GameController};
pub use events::GameEvent;
pub use ledger::{Move, MoveLedger};
pub use session::{GameSession, Outcome};

/// Who plays White. Black is always human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Player vs Player (hotseat)
    #[default]
    #[serde(rename = "pvp")]
    PvP,
    /// White is the Easy AI
    AiEasy,
    /// White is the Hard AI
    AiHard,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::PvP, GameMode::AiEasy, GameMode::AiHard];

    /// AI strength, None in PvP
    pub fn ai_difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::PvP => None,
            GameMode::AiEasy => Some(Difficulty::Easy),
            GameMode::AiHard => Some(Difficulty::Hard),
        }
    }

    /// Color played by the computer, None in PvP
    pub fn ai_color(self) -> Option<Stone> {
        self.ai_difficulty().map(|_| Stone::White)
    }

    #[inline]
    pub fn is_human(self, stone: Stone) -> bool {
        stone.is_player() && self.ai_color() != Some(stone)
    }

    /// Moves taken back by one undo: the AI reply and the human move before it
    pub fn undo_count(self) -> usize {
        match self {
            GameMode::PvP => 1,
            GameMode::AiEasy | GameMode::AiHard => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::PvP => "PvP - Hotseat",
            GameMode::AiEasy => "AI (Easy)",
            GameMode::AiHard => "AI (Hard)",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::PvP => "pvp",
            GameMode::AiEasy => "ai-easy",
            GameMode::AiHard => "ai-hard",
        };
        f.write_str(name)
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PvP),
            "ai-easy" | "easy" => Ok(GameMode::AiEasy),
            "ai-hard" | "hard" => Ok(GameMode::AiHard),
            _ => Err(GameError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_roundtrip_names() {
        for mode in GameMode::ALL {
            assert_eq!(mode.to_string().parse::<GameMode>(), Ok(mode));
        }
        assert_eq!(
            "chess".parse::<GameMode>(),
            Err(GameError::UnknownMode("chess".to_string()))
        );
    }

    #[test]
    fn test_human_colors() {
        assert!(GameMode::PvP.is_human(Stone::Black));
        assert!(GameMode::PvP.is_human(Stone::White));
        assert!(GameMode::AiHard.is_human(Stone::Black));
        assert!(!GameMode::AiHard.is_human(Stone::White));
        assert!(!GameMode::AiEasy.is_human(Stone::Empty));
    }

    #[test]
    fn test_undo_counts() {
        assert_eq!(GameMode::PvP.undo_count(), 1);
        assert_eq!(GameMode::AiEasy.undo_count(), 2);
        assert_eq!(GameMode::AiHard.undo_count(), 2);
    }
}
