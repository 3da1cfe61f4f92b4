//! # CLI Layer
//!
//! One possible UI client for the todo list. This is the only layer that
//! parses arguments, writes to the terminal, installs the log subscriber and
//! decides exit codes.
//!
//! - `setup`: clap definitions (`td`, `td a|d|f`, `td config`, hidden completion helpers)
//! - `commands`: `run()`, context setup and one handler per verb
//! - `render`: turning a `CmdResult` into terminal output

mod commands;
mod render;
mod setup;

pub use commands::run;
