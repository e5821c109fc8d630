use crate::error::{BitpadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for bitpad, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BitpadConfig {
    /// Directory preview documents are written to, relative to the data
    /// directory (e.g. "preview")
    #[serde(default = "default_preview_dir")]
    pub preview_dir: String,

    /// Re-present an existing preview after every edit
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
}

fn default_preview_dir() -> String {
    "preview".to_string()
}

fn default_auto_refresh() -> bool {
    true
}

impl Default for BitpadConfig {
    fn default() -> Self {
        Self {
            preview_dir: default_preview_dir(),
            auto_refresh: default_auto_refresh(),
        }
    }
}

impl BitpadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BitpadError::Io)?;
        let config: BitpadConfig =
            serde_json::from_str(&content).map_err(BitpadError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BitpadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BitpadError::Serialization)?;
        fs::write(config_path, content).map_err(BitpadError::Io)?;
        Ok(())
    }
}
