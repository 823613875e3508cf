use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_WIN_TARGET, MAX_TILE};

/// Largest number of rows or columns a board may have.
pub const MAX_DIMENSION: usize = 64;

/// Board dimensions and the tile value that wins the game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    pub win_target: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            win_target: DEFAULT_WIN_TARGET,
        }
    }
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for a key before redrawing, in milliseconds.
    pub poll_interval_ms: u64,
    /// Paint tiles with the classic palette instead of plain text.
    pub colors: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            colors: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load a game configuration (usually `twenty48.toml`) and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file means the default 4x4 game.
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
        let board = &self.board;
        if board.height == 0 {
            return Err(ConfigError::Validation(
                "board.height must be >= 1".into(),
            ));
        }
        if board.width == 0 {
            return Err(ConfigError::Validation(
                "board.width must be >= 1".into(),
            ));
        }
        if board.height > MAX_DIMENSION || board.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board dimensions must be <= {MAX_DIMENSION}"
            )));
        }
        // Two tiles after reset plus room for the first move.
        if board.height * board.width < 3 {
            return Err(ConfigError::Validation(
                "board must have at least 3 cells".into(),
            ));
        }
        let target = board.win_target;
        if target < 4 || target > MAX_TILE || !target.is_power_of_two() {
            return Err(ConfigError::Validation(format!(
                "board.win_target must be a power of two in 4..={MAX_TILE}"
            )));
        }

        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
