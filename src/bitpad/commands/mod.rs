use crate::config::BitpadConfig;
use crate::index::DisplayBit;
use crate::model::{Bit, Theme, User};
use std::path::PathBuf;

pub mod account;
pub mod config;
pub mod create;
pub mod delete;
pub mod explore;
pub mod helpers;
pub mod list;
pub mod preview;
pub mod publish;
pub mod theme;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command has to say back to whatever UI called it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_bits: Vec<Bit>,
    pub listed_bits: Vec<DisplayBit>,
    pub preview_paths: Vec<PathBuf>,
    pub user: Option<User>,
    pub theme: Option<Theme>,
    pub config: Option<BitpadConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_bits(mut self, bits: Vec<DisplayBit>) -> Self {
        self.listed_bits = bits;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: BitpadConfig) -> Self {
        self.config = Some(config);
        self
    }
}
