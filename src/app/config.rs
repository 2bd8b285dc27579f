use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::translate::{Alphabet, AlphabetError, HOMEROW};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid homerow: {0}")]
    Alphabet(#[from] AlphabetError),

    #[error("Up and down are both bound to {0:?}")]
    KeyConflict(char),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VertigoConfig {
    pub up_key: char,
    pub down_key: char,
    /// Suppress every notification
    pub quiet: bool,
    /// Ten symbols for the digits 1 through 10, in order
    pub homerow: String,
}

impl Default for VertigoConfig {
    fn default() -> Self {
        Self {
            up_key: 'K',
            down_key: 'J',
            quiet: false,
            homerow: HOMEROW.to_string(),
        }
    }
}

impl VertigoConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vertigo")
            .join("config.json")
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Like `load`, but a missing file means defaults
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn validate(&self) -> ConfigResult<Alphabet> {
        if self.up_key == self.down_key {
            return Err(ConfigError::KeyConflict(self.up_key));
        }
        Ok(Alphabet::new(&self.homerow)?)
    }
}
