//! CLI definition for the mdkanban command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mdkanban::Priority;

use crate::config::Overrides;

/// mdkanban - Kanban boards stored as a Markdown checklist.
///
/// Columns are `##` headings and tasks are `- [ ]` items. Every command that
/// changes the board rewrites the file and prints the resulting board as JSON.
#[derive(Parser, Debug)]
#[command(name = "mdkanban")]
#[command(version)]
#[command(about = "Kanban boards stored as a Markdown checklist")]
#[command(
    long_about = "mdkanban reads and edits a kanban board kept in a single Markdown file.\n\n\
    Columns are `## Name` headings; tasks are `- [ ]` / `- [x]` items with\n\
    [id: ...], [Priority: ...] and [Comments: a | b] tags; indented lines are notes.\n\n\
    Configuration is read from ~/.mdkanban/config.* and ./.mdkanban/config.*.\n\n\
    Environment variables:\n  \
    MDKANBAN_BOARD      Default board file\n  \
    MDKANBAN_LOG_LEVEL  Log filter when --debug and RUST_LOG are unset\n  \
    MDKANBAN_PRETTY     Pretty-print JSON output (true/false)"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Board file to operate on
    #[arg(short, long, global = true, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration values given as flags
    pub fn overrides(&self) -> Overrides {
        Overrides {
            board: self.board.clone(),
            pretty: self.compact.then_some(false),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the board
    Show {
        /// Print the canonical Markdown instead of JSON
        #[arg(long)]
        markdown: bool,
    },

    /// Append a task to a column, creating the column if needed
    Add {
        /// Column name
        column: String,
        /// Task text
        text: String,
        /// Priority (Highest, High, Medium, Low, Lowest)
        #[arg(short, long, default_value = "Medium")]
        priority: Priority,
        /// Notes; separate lines with newlines
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Insert a task at a position in a column
    Insert {
        /// Column name
        column: String,
        /// Position; past the end appends
        index: usize,
        /// Task text
        text: String,
        /// Priority (Highest, High, Medium, Low, Lowest)
        #[arg(short, long, default_value = "Medium")]
        priority: Priority,
        /// Notes; separate lines with newlines
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete a task
    Remove {
        /// Column name
        column: String,
        /// Task position in the column
        index: usize,
    },

    /// Move a task to a column and final position
    Move {
        /// Column holding the task
        from_column: String,
        /// Task position in that column
        from_index: usize,
        /// Target column, created if missing
        to_column: String,
        /// Final position in the target column; omitted or past the end appends
        #[arg(long)]
        to_index: Option<usize>,
    },

    /// Flip a task's done flag
    Toggle {
        /// Column name
        column: String,
        /// Task position in the column
        index: usize,
    },

    /// Mark a task done
    Done {
        /// Column name
        column: String,
        /// Task position in the column
        index: usize,
    },

    /// Mark a task not done
    Undone {
        /// Column name
        column: String,
        /// Task position in the column
        index: usize,
    },

    /// Set a task's priority
    Priority {
        /// Column name
        column: String,
        /// Task position in the column
        index: usize,
        /// Highest, High, Medium, Low or Lowest
        priority: Priority,
    },

    /// Edit a task's comments
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Edit columns
    Column {
        #[command(subcommand)]
        action: ColumnAction,
    },

    /// Move a task by id from this board to another board file
    Transfer {
        /// Column holding the task on this board
        source_column: String,
        /// Task id
        task_id: String,
        /// Target board file
        target: PathBuf,
        /// Column on the target board, created if missing
        target_column: String,
        /// Position in the target column; omitted or past the end appends
        #[arg(long)]
        to_index: Option<usize>,
    },

    /// Apply one JSON command, e.g. {"command":"toggle","column":"Todo","index":0}
    Apply {
        /// The command; read from stdin when omitted or `-`
        json: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommentAction {
    /// Append a comment
    Add {
        column: String,
        index: usize,
        text: String,
    },
    /// Replace a comment
    Update {
        column: String,
        index: usize,
        comment_index: usize,
        text: String,
    },
    /// Delete a comment
    Remove {
        column: String,
        index: usize,
        comment_index: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum ColumnAction {
    /// Append an empty column
    Add { name: String },
    /// Delete a column and all its tasks
    Remove { name: String },
    /// Move a column to a new position
    Move { name: String, index: usize },
}
