use std::path::Path;

use log::warn;

use crate::ai::DEFAULT_DEPTH;
use crate::error::ConfigError;
use crate::game::{Player, CONNECT, DEFAULT_COLS, DEFAULT_ROWS};
use crate::session::Role;

pub use crate::game::MAX_DIMENSION;

/// Deepest search accepted from configuration.
pub const MAX_DEPTH: usize = 10;

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Who plays each piece, and which piece opens.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: Role,
    pub two: Role,
    pub first: Player,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: Role::Human,
            two: Role::Search,
            first: Player::One,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub search: SearchConfig,
    /// Seed for every automated player's random choices.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("board.rows", self.board.rows), ("board.cols", self.board.cols)] {
            if value < CONNECT {
                return Err(ConfigError::Validation(format!("{name} must be >= {CONNECT}")));
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_DIMENSION}"
                )));
            }
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
