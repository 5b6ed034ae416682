//! User configuration
//!
//! Read from `config.toml` in the platform config directory
//! (e.g. `~/.config/flashdeck/config.toml`). A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Card width plus gap, in terminal columns
    pub step_width: u16,
    /// Delay before a judged card flips back to its question
    pub reset_delay_ms: u64,
    /// Terminal widths below this use the narrow detail layout
    pub narrow_width: u16,
    /// Columns scrolled per mouse wheel tick in the carousel
    pub scroll_step: u16,
    /// Deck file replacing the built-in categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_width: 28,
            reset_delay_ms: 1000,
            narrow_width: 100,
            scroll_step: 8,
            deck: None,
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flashdeck").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// An explicitly given path must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => {
                    log::warn!("No config directory on this platform, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !required && !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = Self::from_toml(&content)?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.step_width == 0 {
            return Err(ConfigError::Invalid {
                key: "step_width",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.reset_delay_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "reset_delay_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}
