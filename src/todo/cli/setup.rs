use clap::{Parser, Subcommand, ValueEnum};
use todo::api::CompletionTarget;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
}

/// Argument kinds the shell completion script can ask about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompleteField {
    Primaries,
    Secondaries,
    Attributes,
}

impl CompleteField {
    /// Secondaries without a selected primary complete to nothing.
    pub fn target(self, primary: Option<String>) -> Option<CompletionTarget> {
        match self {
            CompleteField::Primaries => Some(CompletionTarget::Primaries),
            CompleteField::Secondaries => primary.map(CompletionTarget::Secondaries),
            CompleteField::Attributes => Some(CompletionTarget::Attributes),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "td", bin_name = "td", version)]
#[command(about = "A two-level todo list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a primary item, or a secondary item under a primary
    #[command(name = "a", display_order = 1)]
    Add {
        /// Primary item
        primary: String,

        /// Secondary item to add under the primary
        secondary: Option<String>,
    },

    /// Delete a secondary item, or a primary item with no secondary items left
    #[command(name = "d", display_order = 2)]
    Delete {
        /// Primary item
        primary: String,

        /// Secondary item to delete from the primary
        secondary: Option<String>,
    },

    /// Set the display format of a primary item (e.g. bold red, shy green)
    #[command(name = "f", display_order = 3)]
    Format {
        /// Primary item
        primary: String,

        /// Style attributes: bold, shy, or a color name
        #[arg(required = true, num_args = 1.., value_name = "ATTRIBUTE")]
        attributes: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (color, file-name)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        #[arg(value_enum)]
        shell: CompletionShell,
    },

    /// Print completion candidates, one per line (used by the completion script)
    #[command(hide = true, name = "__complete")]
    Complete {
        #[arg(value_enum)]
        field: CompleteField,

        /// Selected primary, when completing secondaries
        primary: Option<String>,
    },
}
