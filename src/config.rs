use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing::warn;

use crate::error::ConfigError;
use crate::game::Symbols;

/// How column numbers typed by players are interpreted.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Columns are numbered 1..=7 when true, 0..=6 otherwise.
    pub one_based: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig { one_based: true }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: Symbols,
    pub input: InputConfig,
    pub logging: LoggingConfig,
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Symbols {
            player1,
            player2,
            empty,
        } = self.display;

        for (name, symbol) in [("player1", player1), ("player2", player2), ("empty", empty)] {
            if symbol.is_whitespace() || symbol == '|' {
                return Err(ConfigError::Validation(format!(
                    "display.{name} must be a visible character other than '|'"
                )));
            }
        }
        if player1 == player2 || player1 == empty || player2 == empty {
            return Err(ConfigError::Validation(
                "display symbols must be distinct".into(),
            ));
        }

        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a valid level",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
