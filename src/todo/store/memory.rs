use super::DataStore;
use crate::error::Result;
use crate::model::TodoList;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    blob: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already-serialized list.
    pub fn with_json(json: &str) -> Self {
        Self {
            blob: Some(json.to_string()),
            saves: 0,
        }
    }

    pub fn json(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<TodoList> {
        match &self.blob {
            Some(json) => TodoList::load(json),
            None => Ok(TodoList::new()),
        }
    }

    fn save(&mut self, list: &TodoList) -> Result<()> {
        self.blob = Some(list.to_json()?);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::format::Format;
    use crate::model::{Primary, TodoList};
    use std::collections::BTreeMap;

    /// Builds lists for tests without going through the commands.
    #[derive(Default)]
    pub struct ListFixture {
        items: BTreeMap<String, Primary>,
    }

    impl ListFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_primary(mut self, name: &str, secondaries: &[&str]) -> Self {
            self.items.insert(
                name.to_string(),
                Primary::with_secondaries(secondaries.iter().copied()),
            );
            self
        }

        pub fn with_format(mut self, name: &str, format: Format) -> Self {
            self.items.entry(name.to_string()).or_default().format = Some(format);
            self
        }

        pub fn build(self) -> TodoList {
            TodoList::from_items(self.items)
        }
    }
}
