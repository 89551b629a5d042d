use std::path::PathBuf;

use crate::board::Pos;

/// Why a placement or removal was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("coordinates ({row}, {col}) are off the board")]
    OutOfRange { row: i32, col: i32 },

    #[error("cannot place an empty stone")]
    EmptyStone,

    #[error("cell {0} has no stone to remove")]
    EmptyCell(Pos),

    #[error("it is not the human player's turn")]
    WrongTurn,

    #[error("the game is over")]
    GameOver,

    #[error("the AI is thinking")]
    AiThinking,
}

/// Errors produced by the game core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),

    #[error("unknown game mode '{0}' (expected pvp, ai-easy or ai-hard)")]
    UnknownMode(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = GameError::from(MoveRejection::Occupied(Pos::new(7, 7)));
        assert_eq!(err.to_string(), "invalid move: cell (7, 7) is already occupied");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = GameError::InvalidMove(MoveRejection::OutOfRange { row: 15, col: -1 });
        assert_eq!(
            err.to_string(),
            "invalid move: coordinates (15, -1) are off the board"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai.easy_random_chance must be in [0, 1]".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ai.easy_random_chance must be in [0, 1]"
        );
    }
}
