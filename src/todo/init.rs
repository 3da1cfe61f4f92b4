use crate::api::TodoApi;
use crate::config::TodoConfig;
use crate::error::{Result, TodoError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the platform data directory.
pub const DATA_DIR_ENV: &str = "TODO_LIST_DATA";

pub struct TodoContext {
    pub api: TodoApi<FileStore>,
    pub config: TodoConfig,
    pub data_dir: PathBuf,
}

/// `$TODO_LIST_DATA` if set and non-empty, else the platform data directory.
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "todo-list", "todo-list")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodoError::Config("could not determine a data directory".to_string()))
}

pub fn initialize(data_dir: &Path) -> Result<TodoContext> {
    let config = TodoConfig::load(data_dir)?;
    debug!(data_dir = %data_dir.display(), file = %config.file_name, "initializing");

    let store = FileStore::new(data_dir.to_path_buf()).with_file_name(&config.file_name);
    let api = TodoApi::new(store, data_dir.to_path_buf())?;

    Ok(TodoContext {
        api,
        config,
        data_dir: data_dir.to_path_buf(),
    })
}
