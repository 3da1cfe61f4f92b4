//! # todo-list
//!
//! A two-level todo list: *primary* items, each holding a set of *secondary*
//! items, plus a display format (color and thickness) per primary.
//!
//! Like any tool built this way, it is a library that happens to have a CLI
//! client (`td`), not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, terminal output, logging, exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded list, dispatches to commands             │
//! │  - Writes the list back only when it changed                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, delete, list, format, complete, config              │
//! │  - Operates on `TodoList`, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`model`]: `TodoList` and `Primary`
//! - [`format`]: Colors, thickness and style-token parsing
//! - [`store`]: Storage abstraction, implementations and the on-disk snapshot
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod init;
pub mod model;
pub mod store;
