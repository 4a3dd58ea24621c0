//! Moving a task between two independently stored boards
//!
//! The transfer is two separate load/mutate/write cycles: the task is removed
//! from the source and the source is written, then the target is loaded fresh,
//! the task inserted and the target written. Nothing is shared with any open
//! [`crate::BoardStore`], and nothing is atomic: if the target step fails after
//! the source write, the task is gone from both boards.

use crate::error::{KanbanError, Result};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::storage::{BoardStorage, FileStorage};
use crate::store::{load_board, save_board};
use crate::types::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// What to move, and where to put it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Column holding the task on the source board; must exist
    pub source_column: String,
    /// Id of the task to move
    pub task_id: TaskId,
    /// Column on the target board; created if missing
    pub target_column: String,
    /// Insert position; out of range or `None` appends
    #[serde(default)]
    pub to_index: Option<usize>,
}

impl TransferRequest {
    /// Move `task_id` from `source_column` to the end of `target_column`
    pub fn new(
        source_column: impl Into<String>,
        task_id: impl Into<TaskId>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            source_column: source_column.into(),
            task_id: task_id.into(),
            target_column: target_column.into(),
            to_index: None,
        }
    }

    /// Insert at a position in the target column
    pub fn at_index(mut self, index: usize) -> Self {
        self.to_index = Some(index);
        self
    }
}

/// Move a task between two board files, generating UUIDs for any task that
/// lacks an id when either file is read.
pub fn transfer_between_files(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
    request: &TransferRequest,
) -> Result<Option<Task>> {
    transfer_task(
        &FileStorage::new(source.as_ref()),
        &FileStorage::new(target.as_ref()),
        request,
        &UuidGenerator,
    )
}

/// Move a task, addressed by id, from one board to another.
///
/// Returns:
/// - `Err(KanbanError::SourceColumnNotFound)` if the source board has no such column
/// - `Ok(None)` if the column exists but holds no task with that id; nothing is written
/// - `Ok(Some(task))` with the moved task on success
pub fn transfer_task(
    source: &dyn BoardStorage,
    target: &dyn BoardStorage,
    request: &TransferRequest,
    ids: &dyn IdGenerator,
) -> Result<Option<Task>> {
    let mut source_board = load_board(source, ids)?;
    let Some(column) = source_board.column_mut(&request.source_column) else {
        return Err(KanbanError::SourceColumnNotFound {
            column: request.source_column.clone(),
            location: source.location().to_path_buf(),
        });
    };
    let Some(index) = column.position_of(&request.task_id) else {
        debug!(
            task = %request.task_id,
            column = %request.source_column,
            "task not found in source column"
        );
        return Ok(None);
    };
    let task = column.tasks.remove(index);
    save_board(source, &source_board)?;

    let mut target_board = load_board(target, ids)?;
    if target_board.find_task(&task.id).is_some() {
        warn!(task = %task.id, "target board already has a task with this id");
    }
    let tasks = &mut target_board.ensure_column(&request.target_column).tasks;
    match request.to_index {
        Some(index) if index <= tasks.len() => tasks.insert(index, task.clone()),
        _ => tasks.push(task.clone()),
    }
    save_board(target, &target_board)?;

    info!(
        task = %task.id,
        from = %source.location().display(),
        to = %target.location().display(),
        column = %request.target_column,
        "transferred task"
    );
    Ok(Some(task))
}
