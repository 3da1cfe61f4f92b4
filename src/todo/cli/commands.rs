use super::render::{print_config, print_list, print_messages, print_suggestions};
use super::setup::{Cli, CompleteField, CompletionShell, Commands};
use clap::Parser;
use todo::api::{ConfigAction, TodoApi};
use todo::config::ColorMode;
use todo::error::Result;
use todo::init::{initialize, resolve_data_dir};
use todo::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Overrides the log filter, e.g. `TODO_LIST_LOG=todo=trace`.
const LOG_ENV: &str = "TODO_LIST_LOG";

struct AppContext {
    api: TodoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        // The completion script is static and needs no data
        Some(Commands::Completions { shell }) => handle_completions(shell),
        // Completion must never fail loudly inside the shell
        Some(Commands::Complete { field, primary }) => {
            handle_complete(field, primary);
            Ok(())
        }
        Some(Commands::Add { primary, secondary }) => {
            handle_add(&mut init_context()?, &primary, secondary.as_deref())
        }
        Some(Commands::Delete { primary, secondary }) => {
            handle_delete(&mut init_context()?, &primary, secondary.as_deref())
        }
        Some(Commands::Format {
            primary,
            attributes,
        }) => handle_format(&mut init_context()?, &primary, &attributes),
        Some(Commands::Config { key, value }) => handle_config(&init_context()?, key, value),
        None => handle_list(&init_context()?),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    let ctx = initialize(&data_dir)?;

    match ctx.config.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
    debug!(data_dir = %ctx.data_dir.display(), color = %ctx.config.color, "context ready");

    Ok(AppContext { api: ctx.api })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_items()?;
    print_list(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, primary: &str, secondary: Option<&str>) -> Result<()> {
    let result = ctx.api.add_item(primary, secondary)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, primary: &str, secondary: Option<&str>) -> Result<()> {
    let result = ctx.api.delete_item(primary, secondary)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_format(ctx: &mut AppContext, primary: &str, attributes: &[String]) -> Result<()> {
    let result = ctx.api.set_format(primary, attributes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(&config.list_all());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_completions(shell: CompletionShell) -> Result<()> {
    match shell {
        CompletionShell::Bash => print!("{}", BASH_COMPLETION_SCRIPT),
    }
    Ok(())
}

fn handle_complete(field: CompleteField, primary: Option<String>) {
    let Some(target) = field.target(primary) else {
        return;
    };
    let Ok(ctx) = init_context() else {
        return;
    };
    if let Ok(result) = ctx.api.complete(&target) {
        print_suggestions(&result.suggestions);
    }
}

const BASH_COMPLETION_SCRIPT: &str = include_str!("bash.completion.sh");
