use super::DataStore;
use crate::config::DEFAULT_FILE_NAME;
use crate::error::{Result, TodoError};
use crate::model::TodoList;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodoError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<TodoList> {
        let path = self.data_path();
        if !path.exists() {
            debug!(path = %path.display(), "no data file yet, starting empty");
            return Ok(TodoList::new());
        }
        let content = fs::read_to_string(&path).map_err(TodoError::Io)?;
        let list = TodoList::load(&content)?;
        debug!(path = %path.display(), primaries = list.items().len(), "loaded todo list");
        Ok(list)
    }

    fn save(&mut self, list: &TodoList) -> Result<()> {
        self.ensure_dir()?;
        let path = self.data_path();
        fs::write(&path, list.to_json()?).map_err(TodoError::Io)?;
        debug!(path = %path.display(), "saved todo list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nested"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested"));

        let mut list = TodoList::new();
        add::run(&mut list, "write", Some("code")).unwrap();
        store.save(&list).unwrap();

        assert!(temp.path().join("nested").join(DEFAULT_FILE_NAME).exists());
        let loaded = store.load().unwrap();
        assert_eq!(loaded.items(), list.items());
        assert!(!loaded.changed());
    }

    #[test]
    fn honours_custom_file_name() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf()).with_file_name("work.json");
        store.save(&TodoList::new()).unwrap();
        assert!(temp.path().join("work.json").exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_FILE_NAME), "{not json").unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(matches!(
            store.load(),
            Err(TodoError::MalformedPersistedState(_))
        ));
    }
}
