//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every todo-list operation, whatever the UI.
//!
//! `TodoApi` loads the list from its store once, hands it to the commands, and
//! writes it back after a mutating call only when the list reports a change.
//! Failed commands leave the list untouched, so nothing is written for them.
//!
//! ## Generic Over DataStore
//!
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::TodoList;
use crate::store::DataStore;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct TodoApi<S: DataStore> {
    store: S,
    list: TodoList,
    config_dir: PathBuf,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Result<Self> {
        let list = store.load()?;
        Ok(Self {
            store,
            list,
            config_dir,
        })
    }

    pub fn add_item(
        &mut self,
        primary: &str,
        secondary: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.list, primary, secondary)?;
        self.persist()?;
        Ok(result)
    }

    pub fn delete_item(
        &mut self,
        primary: &str,
        secondary: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.list, primary, secondary)?;
        self.persist()?;
        Ok(result)
    }

    pub fn set_format<I: AsRef<str>>(
        &mut self,
        primary: &str,
        tokens: &[I],
    ) -> Result<commands::CmdResult> {
        let result = commands::format::run(&mut self.list, primary, tokens)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.list)
    }

    pub fn complete(&self, target: &CompletionTarget) -> Result<commands::CmdResult> {
        commands::complete::run(&self.list, target)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<()> {
        if !self.list.changed() {
            debug!("todo list unchanged, skipping save");
            return Ok(());
        }
        self.store.save(&self.list)?;
        self.list.mark_saved();
        info!("todo list saved");
        Ok(())
    }
}

pub use crate::commands::complete::CompletionTarget;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::render_lines;
pub use crate::commands::{CmdMessage, CmdResult, ListedPrimary, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api_with(json: &str) -> TodoApi<InMemoryStore> {
        TodoApi::new(InMemoryStore::with_json(json), std::env::temp_dir()).unwrap()
    }

    #[test]
    fn loads_list_from_store() {
        let api = api_with(r#"{"Items": {"write": {"code": true}}}"#);
        let result = api.list_items().unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].secondaries, vec!["code"]);
    }

    #[test]
    fn malformed_store_fails_construction() {
        assert!(TodoApi::new(InMemoryStore::with_json("}"), std::env::temp_dir()).is_err());
    }

    #[test]
    fn successful_mutation_is_saved() {
        let mut api = api_with("");
        api.add_item("sleep", None).unwrap();

        assert_eq!(api.store().saves(), 1);
        assert!(!api.list().changed());
        let reloaded = TodoList::load(api.store().json().unwrap()).unwrap();
        assert!(reloaded.get("sleep").is_some());
    }

    #[test]
    fn failed_mutation_is_not_saved() {
        let mut api = api_with(r#"{"Items": {"write": {"code": true}}}"#);

        assert!(api.add_item("write", None).is_err());
        assert!(api.delete_item("write", None).is_err());
        assert!(api.set_format("write", &["crazy"]).is_err());

        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn reads_are_not_saved() {
        let api = api_with(r#"{"Items": {"write": {}}}"#);
        api.list_items().unwrap();
        api.complete(&CompletionTarget::Primaries).unwrap();
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn dispatches_format_and_delete() {
        let mut api = api_with(r#"{"Items": {"write": {"code": true}}}"#);
        api.set_format("write", &["bold", "red"]).unwrap();
        api.delete_item("write", Some("code")).unwrap();
        api.delete_item("write", None).unwrap();

        assert_eq!(api.store().saves(), 3);
        assert!(api.list().is_empty());
    }
}
