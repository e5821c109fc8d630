use crate::commands::{CmdMessage, CmdResult};
use crate::config::BitpadConfig;
use crate::error::{BitpadError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = BitpadConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "preview-dir" => config.preview_dir = value,
                "auto-refresh" => {
                    config.auto_refresh = value.parse().map_err(|_| {
                        BitpadError::Api(format!("auto-refresh must be true or false, got {}", value))
                    })?;
                }
                other => {
                    return Err(BitpadError::Api(format!("Unknown config key: {}", other)));
                }
            }
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("Config updated: {}", key)));
        }
    }

    Ok(result.with_config(config))
}
