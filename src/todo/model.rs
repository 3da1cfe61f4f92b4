use crate::error::{Result, TodoError};
use crate::format::Format;
use crate::store::snapshot::Snapshot;
use std::collections::{BTreeMap, BTreeSet};

/// A top-level todo bucket with its nested items and display format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Primary {
    pub secondaries: BTreeSet<String>,
    pub format: Option<Format>,
}

impl Primary {
    pub fn with_secondaries<I, S>(secondaries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            secondaries: secondaries.into_iter().map(Into::into).collect(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }
}

/// The whole two-level list.
///
/// `changed` is transient: it is never persisted and only tells the caller
/// whether the list needs to be written back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: BTreeMap<String, Primary>,
    changed: bool,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrates a list from its persisted JSON form. An empty blob is an empty list.
    pub fn load(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        let snapshot: Snapshot =
            serde_json::from_str(json).map_err(TodoError::MalformedPersistedState)?;
        Ok(snapshot.into_list())
    }

    pub fn to_json(&self) -> Result<String> {
        let snapshot = Snapshot::from_list(self);
        serde_json::to_string_pretty(&snapshot).map_err(TodoError::Serialization)
    }

    pub fn from_items(items: BTreeMap<String, Primary>) -> Self {
        Self {
            items,
            changed: false,
        }
    }

    pub fn items(&self) -> &BTreeMap<String, Primary> {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut BTreeMap<String, Primary> {
        &mut self.items
    }

    pub fn get(&self, primary: &str) -> Option<&Primary> {
        self.items.get(primary)
    }

    pub fn get_mut(&mut self, primary: &str) -> Option<&mut Primary> {
        self.items.get_mut(primary)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    /// Called by the persistence layer once the list has been written.
    pub fn mark_saved(&mut self) {
        self.changed = false;
    }
}
