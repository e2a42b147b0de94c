use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;

use crate::error::ConfigError;

/// Longest cosmetic pause before the computer moves
pub const MAX_AI_DELAY_MS: u64 = 10_000;

/// Smallest window the board and side panel fit into
pub const MIN_WINDOW: (f32, f32) = (320.0, 240.0);

/// Top-level application configuration, loadable from TOML.
///
/// Board size and win length are compile-time constants, not settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pause before the computer plays, in milliseconds
    pub ai_delay_ms: u64,
    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
    pub window: WindowConfig,
}

/// Initial native window size
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ai_delay_ms: 700,
            log_level: "info".to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 720.0,
            height: 560.0,
        }
    }
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
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ai_delay_ms must be <= {MAX_AI_DELAY_MS}"
            )));
        }
        self.level_filter()?;
        if self.window.width < MIN_WINDOW.0 || self.window.height < MIN_WINDOW.1 {
            return Err(ConfigError::Validation(format!(
                "window must be at least {}x{}",
                MIN_WINDOW.0, MIN_WINDOW.1
            )));
        }
        Ok(())
    }

    /// Parsed `log_level`
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| {
            ConfigError::Validation(format!("unknown log_level '{}'", self.log_level))
        })
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
