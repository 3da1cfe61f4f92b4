use crate::config::TodoConfig;
use crate::format::Format;

pub mod add;
pub mod complete;
pub mod config;
pub mod delete;
pub mod format;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A primary as it appears in a listing: name, format and sorted secondaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPrimary {
    pub name: String,
    pub format: Option<Format>,
    pub secondaries: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedPrimary>,
    pub suggestions: Vec<String>,
    pub config: Option<TodoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, listed: Vec<ListedPrimary>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_config(mut self, config: TodoConfig) -> Self {
        self.config = Some(config);
        self
    }
}
