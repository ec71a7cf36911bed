use std::path::PathBuf;

use crate::game::Player;

/// Errors from dropping a piece into the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameOver,
}

/// Errors from building a board from dimensions or from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 4x4, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },

    #[error("board must be at most {max}x{max}, got {rows}x{cols}", max = crate::game::MAX_DIMENSION)]
    TooLarge { rows: usize, cols: usize },

    #[error("board rows have different lengths")]
    RaggedRows,

    #[error("unknown cell glyph {0:?}")]
    UnknownCell(char),

    #[error("piece at row {row}, column {col} has an empty cell below it")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors raised by the turn driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("{player} has no valid move")]
    NoValidMove { player: Player },

    #[error("it is not a human turn ({player} is automated)")]
    NotHumanTurn { player: Player },

    #[error("it is not an automated turn ({player} is human)")]
    NotAutomatedTurn { player: Player },
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
