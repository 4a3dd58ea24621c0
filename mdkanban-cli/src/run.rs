//! Executes parsed subcommands against the configured board

use std::io::Read;

use anyhow::{Context, Result};
use mdkanban::codec::serialize;
use mdkanban::{dispatch, BoardCommand, BoardStore, BoardUpdate, Outcome, Task, TaskId};
use serde::Serialize;
use tracing::debug;

use crate::cli::{ColumnAction, CommentAction, Commands};
use crate::config::Settings;

/// Run one subcommand, writing its output to stdout
pub fn run(command: Commands, settings: &Settings) -> Result<()> {
    let mut store = BoardStore::open(&settings.board)
        .with_context(|| format!("cannot open board {}", settings.board.display()))?;
    debug!(board = %settings.board.display(), "opened board");

    if let Commands::Show { markdown } = command {
        if markdown {
            print!("{}", serialize(store.tasks()));
            return Ok(());
        }
        return print_json(store.tasks(), settings.pretty);
    }

    let update = execute(&mut store, command, settings)?;
    print_json(&update, settings.pretty)
}

fn execute(store: &mut BoardStore, command: Commands, settings: &Settings) -> Result<BoardUpdate> {
    let command = match command {
        Commands::Show { .. } => return Ok(snapshot(store, Outcome::Unchanged, None)),

        Commands::Insert {
            column,
            index,
            text,
            priority,
            notes,
        } => {
            let mut task = Task::new(text).with_priority(priority);
            task.set_notes(notes);
            let task = store.insert_task(&column, index, task)?;
            return Ok(snapshot(store, Outcome::Applied, Some(task)));
        }

        Commands::Move {
            from_column,
            from_index,
            to_column,
            to_index,
        } => {
            let outcome = store.move_task(&from_column, &to_column, from_index, to_index)?;
            return Ok(snapshot(store, outcome, None));
        }

        Commands::Done { column, index } => {
            let outcome = store.set_done(&column, index)?;
            return Ok(snapshot(store, outcome, None));
        }

        Commands::Undone { column, index } => {
            let outcome = store.set_not_done(&column, index)?;
            return Ok(snapshot(store, outcome, None));
        }

        Commands::Add {
            column,
            text,
            priority,
            notes,
        } => BoardCommand::Add {
            column,
            text,
            priority,
            notes,
        },
        Commands::Remove { column, index } => BoardCommand::Remove { column, index },
        Commands::Toggle { column, index } => BoardCommand::Toggle { column, index },
        Commands::Priority {
            column,
            index,
            priority,
        } => BoardCommand::SetPriority {
            column,
            index,
            priority,
        },
        Commands::Comment { action } => comment_command(action),
        Commands::Column { action } => column_command(action),
        Commands::Transfer {
            source_column,
            task_id,
            target,
            target_column,
            to_index,
        } => BoardCommand::Transfer {
            source: settings.board.clone(),
            source_column,
            task_id: TaskId::new(task_id),
            target,
            target_column,
            to_index,
        },
        Commands::Apply { json } => decode_command(json)?,
    };

    Ok(dispatch(store, command)?)
}

fn comment_command(action: CommentAction) -> BoardCommand {
    match action {
        CommentAction::Add {
            column,
            index,
            text,
        } => BoardCommand::AddComment {
            column,
            index,
            comment: text,
        },
        CommentAction::Update {
            column,
            index,
            comment_index,
            text,
        } => BoardCommand::UpdateComment {
            column,
            index,
            comment_index,
            comment: text,
        },
        CommentAction::Remove {
            column,
            index,
            comment_index,
        } => BoardCommand::RemoveComment {
            column,
            index,
            comment_index,
        },
    }
}

fn column_command(action: ColumnAction) -> BoardCommand {
    match action {
        ColumnAction::Add { name } => BoardCommand::AddColumn { name },
        ColumnAction::Remove { name } => BoardCommand::RemoveColumn { name },
        ColumnAction::Move { name, index } => BoardCommand::MoveColumn {
            column_name: name,
            new_index: index,
        },
    }
}

/// Decode a JSON command from the argument, or from stdin when absent or `-`
fn decode_command(json: Option<String>) -> Result<BoardCommand> {
    let json = match json {
        Some(json) if json != "-" => json,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read command from stdin")?;
            buffer
        }
    };
    BoardCommand::from_json(&json).context("invalid command JSON")
}

fn snapshot(store: &BoardStore, outcome: Outcome, task: Option<Task>) -> BoardUpdate {
    BoardUpdate {
        applied: outcome.is_applied(),
        task,
        tasks: store.tasks().clone(),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
