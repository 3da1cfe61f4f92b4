use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_FILE_NAME: &str = "todo-list.json";

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let the terminal decide (tty detection, NO_COLOR, CLICOLOR...)
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(s)
    }
}

impl FromStr for ColorMode {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(TodoError::Config(format!(
                "invalid color mode: {} (expected auto, always or never)",
                other
            ))),
        }
    }
}

/// Configuration for the todo list, stored next to the data file as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Name of the data file inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            file_name: default_file_name(),
        }
    }
}

impl TodoConfig {
    pub const KEYS: [&'static str; 2] = ["color", "file-name"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(TodoError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "color" => Some(self.color.to_string()),
            "file-name" => Some(self.file_name.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "color" => self.color = value.parse()?,
            "file-name" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(TodoError::Config(format!(
                        "invalid file name: {:?}",
                        value
                    )));
                }
                self.file_name = value.to_string();
            }
            other => return Err(TodoError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}
