use crate::commands::{CmdMessage, CmdResult};
use crate::config::TodoConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TodoConfig::load(dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(val),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::ColorMode;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(TodoConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("color".into(), "never".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "color set to never");

        let loaded = TodoConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.color, ColorMode::Never);
    }

    #[test]
    fn invalid_set_reports_error_and_keeps_file() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("color".into(), "sometimes".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn show_unknown_key() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("editor".into())).unwrap();
        assert_eq!(result.messages[0].content, "Unknown config key: editor");
    }
}
