//! mdkanban CLI - edit a Markdown kanban board from the command line.
//!
//! Commands:
//! - `mdkanban show [--markdown]`: Print the board
//! - `mdkanban add <column> <text>`: Append a task
//! - `mdkanban insert <column> <index> <text>`: Insert a task at a position
//! - `mdkanban remove <column> <index>`: Delete a task
//! - `mdkanban move <from> <index> <to> [--to-index N]`: Move a task
//! - `mdkanban toggle|done|undone <column> <index>`: Change a task's done flag
//! - `mdkanban priority <column> <index> <level>`: Set a task's priority
//! - `mdkanban comment add|update|remove ...`: Edit a task's comments
//! - `mdkanban column add|remove|move ...`: Edit columns
//! - `mdkanban transfer <column> <id> <target-file> <target-column>`: Move a task to another board
//! - `mdkanban apply [json]`: Apply one JSON command
//!
//! Environment variables:
//! - MDKANBAN_BOARD: Default board file
//! - MDKANBAN_LOG_LEVEL: Log filter when neither --debug nor RUST_LOG is set
//! - MDKANBAN_PRETTY: Pretty-print JSON output
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

mod cli;
mod config;
mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::ConfigProvider;

fn main() {
    let cli = Cli::parse();

    let settings = match ConfigProvider::new().load(&cli.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("mdkanban=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run::run(cli.command, &settings) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
