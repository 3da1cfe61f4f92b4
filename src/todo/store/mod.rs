//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the list is kept. Commands never touch
//! it; the API loads the list once and writes it back only when it changed.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file in the data directory
//!   (`todo-list.json` unless configured otherwise)
//! - [`memory::InMemoryStore`]: keeps the serialized blob in memory, for tests
//!
//! Both go through the same [`snapshot::Snapshot`] JSON layout, so the
//! in-memory store exercises the exact bytes the file store would write.

use crate::error::Result;
use crate::model::TodoList;

pub mod fs;
pub mod memory;
pub mod snapshot;

pub trait DataStore {
    /// Load the persisted list, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<TodoList>;

    /// Persist the list, replacing whatever was stored before.
    fn save(&mut self, list: &TodoList) -> Result<()>;
}
