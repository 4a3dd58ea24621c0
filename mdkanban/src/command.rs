//! Command interface for hosts driving a board
//!
//! A host (editor panel, CLI, ...) sends one [`BoardCommand`] at a time and
//! gets back a [`BoardUpdate`] carrying the full board snapshot, whether or
//! not the command changed anything. Commands are JSON objects tagged by a
//! `command` field:
//!
//! ```json
//! {"command": "move", "fromColumn": "Todo", "toColumn": "Done", "fromIndex": 0, "toIndex": 1}
//! ```

use crate::error::Result;
use crate::store::BoardStore;
use crate::storage::FileStorage;
use crate::transfer::{transfer_task, TransferRequest};
use crate::types::{Board, Outcome, Priority, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Column name that marks tasks done when a task is moved into it
pub const DONE_COLUMN: &str = "done";

/// One operation requested by a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BoardCommand {
    /// Flip a task's done flag
    Toggle { column: String, index: usize },

    /// Drag a task to a column and position.
    ///
    /// `to_index` is the drop position in the list as displayed before the
    /// move. The task ends up done if the target column is named `Done`
    /// (any case) and not done otherwise.
    Move {
        from_column: String,
        to_column: String,
        from_index: usize,
        #[serde(default)]
        to_index: Option<usize>,
    },

    /// Append a new task. Ignored when `text` is empty.
    Add {
        column: String,
        text: String,
        #[serde(default)]
        priority: Priority,
        #[serde(default)]
        notes: Option<String>,
    },

    /// Delete a task
    Remove { column: String, index: usize },

    /// Change a task's priority
    SetPriority {
        column: String,
        index: usize,
        priority: Priority,
    },

    /// Append an empty column. Ignored when `name` is empty.
    AddColumn { name: String },

    /// Delete a column and its tasks
    RemoveColumn { name: String },

    /// Reorder a column
    MoveColumn { column_name: String, new_index: usize },

    /// Append a comment. Ignored when `comment` is empty.
    AddComment {
        column: String,
        index: usize,
        comment: String,
    },

    /// Replace a comment. Ignored when `comment` is empty.
    UpdateComment {
        column: String,
        index: usize,
        comment_index: usize,
        comment: String,
    },

    /// Delete a comment
    RemoveComment {
        column: String,
        index: usize,
        comment_index: usize,
    },

    /// Move a task, by id, from one board file to another
    Transfer {
        source: PathBuf,
        source_column: String,
        task_id: TaskId,
        target: PathBuf,
        target_column: String,
        #[serde(default)]
        to_index: Option<usize>,
    },
}

impl BoardCommand {
    /// Decode a command from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle { .. } => "toggle",
            Self::Move { .. } => "move",
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::SetPriority { .. } => "setPriority",
            Self::AddColumn { .. } => "addColumn",
            Self::RemoveColumn { .. } => "removeColumn",
            Self::MoveColumn { .. } => "moveColumn",
            Self::AddComment { .. } => "addComment",
            Self::UpdateComment { .. } => "updateComment",
            Self::RemoveComment { .. } => "removeComment",
            Self::Transfer { .. } => "transfer",
        }
    }
}

/// Reply to every command: the board as it now is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename = "update")]
pub struct BoardUpdate {
    /// Whether the command changed anything
    pub applied: bool,
    /// The task created, or moved by a transfer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    /// Full snapshot of the board
    pub tasks: Board,
}

/// Apply a command to a store and return the resulting snapshot.
///
/// A transfer touching the store's own file reloads the store afterwards, so
/// the snapshot reflects what the transfer wrote. Ids missing on either board
/// are generated with the store's own generator.
pub fn dispatch(store: &mut BoardStore, command: BoardCommand) -> Result<BoardUpdate> {
    let name = command.name();
    let (outcome, task) = apply(store, command)?;
    debug!(command = name, applied = outcome.is_applied(), "dispatched command");
    Ok(BoardUpdate {
        applied: outcome.is_applied(),
        task,
        tasks: store.tasks().clone(),
    })
}

fn apply(store: &mut BoardStore, command: BoardCommand) -> Result<(Outcome, Option<Task>)> {
    let outcome = match command {
        BoardCommand::Toggle { column, index } => store.toggle_done(&column, index)?,

        BoardCommand::Move {
            from_column,
            to_column,
            from_index,
            to_index,
        } => {
            return move_and_mark(store, &from_column, &to_column, from_index, to_index)
                .map(|outcome| (outcome, None));
        }

        BoardCommand::Add {
            column,
            text,
            priority,
            notes,
        } => {
            if column.is_empty() || text.is_empty() {
                Outcome::Unchanged
            } else {
                let task = store.add_task(&column, text, priority, notes)?;
                return Ok((Outcome::Applied, Some(task)));
            }
        }

        BoardCommand::Remove { column, index } => store.remove_task(&column, index)?,

        BoardCommand::SetPriority {
            column,
            index,
            priority,
        } => store.set_task_priority(&column, index, priority)?,

        BoardCommand::AddColumn { name } => {
            if name.is_empty() {
                Outcome::Unchanged
            } else {
                store.add_column(&name)?
            }
        }

        BoardCommand::RemoveColumn { name } => store.remove_column(&name)?,

        BoardCommand::MoveColumn {
            column_name,
            new_index,
        } => store.move_column(&column_name, new_index)?,

        BoardCommand::AddComment {
            column,
            index,
            comment,
        } => {
            if comment.is_empty() {
                Outcome::Unchanged
            } else {
                store.add_task_comment(&column, index, comment)?
            }
        }

        BoardCommand::UpdateComment {
            column,
            index,
            comment_index,
            comment,
        } => {
            if comment.is_empty() {
                Outcome::Unchanged
            } else {
                store.update_task_comment(&column, index, comment_index, comment)?
            }
        }

        BoardCommand::RemoveComment {
            column,
            index,
            comment_index,
        } => store.remove_task_comment(&column, index, comment_index)?,

        BoardCommand::Transfer {
            source,
            source_column,
            task_id,
            target,
            target_column,
            to_index,
        } => {
            let request = TransferRequest {
                source_column,
                task_id,
                target_column,
                to_index,
            };
            let moved = transfer_task(
                &FileStorage::new(&source),
                &FileStorage::new(&target),
                &request,
                store.id_generator(),
            )?;
            let touched =
                same_file(store.location(), &source) || same_file(store.location(), &target);
            if moved.is_some() && touched {
                store.reload()?;
            }
            return Ok((moved.is_some().into(), moved));
        }
    };
    Ok((outcome, None))
}

/// Move a task, then set its done flag from the target column's name
fn move_and_mark(
    store: &mut BoardStore,
    from_column: &str,
    to_column: &str,
    from_index: usize,
    to_index: Option<usize>,
) -> Result<Outcome> {
    let Some(id) = store.tasks().task(from_column, from_index).map(|t| t.id.clone()) else {
        return Ok(Outcome::Unchanged);
    };

    // The drop index counts the task itself when dragging down one column
    let to_index = match to_index {
        Some(index) if from_column == to_column && from_index < index => Some(index - 1),
        other => other,
    };
    store.move_task(from_column, to_column, from_index, to_index)?;

    let Some(index) = store
        .tasks()
        .column(to_column)
        .and_then(|c| c.position_of(&id))
    else {
        return Ok(Outcome::Applied);
    };
    let done = to_column.eq_ignore_ascii_case(DONE_COLUMN);
    if store.tasks().tasks_in(to_column)[index].done == done {
        return Ok(Outcome::Applied);
    }
    if done {
        store.set_done(to_column, index)
    } else {
        store.set_not_done(to_column, index)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
