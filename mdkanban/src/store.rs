//! BoardStore - one board bound to one storage location
//!
//! The store parses its location once, at construction, and keeps the board in
//! memory from then on. Every mutation is followed by a full write of the
//! board; there is no batching. The store never re-reads its location, so
//! edits made by others are invisible until a new store is opened, and the
//! next mutation overwrites them.
//!
//! Position-addressed operations are tolerant: an unknown column, task index
//! or comment index yields [`Outcome::Unchanged`] and writes nothing. Errors
//! are reserved for storage failures. When a write fails the in-memory change
//! is kept, so memory can be ahead of storage.

use crate::codec;
use crate::error::{KanbanError, Result};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::storage::{BoardStorage, FileStorage};
use crate::types::{Board, Outcome, Priority, Task, TaskId};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Read and parse a board, writing it back once if ids had to be generated
pub fn load_board(storage: &dyn BoardStorage, ids: &dyn IdGenerator) -> Result<Board> {
    let text = storage.read()?;
    let parsed = codec::parse(&text, ids);
    if parsed.ids_generated {
        info!(
            location = %storage.location().display(),
            "assigned missing task ids, writing board back"
        );
        save_board(storage, &parsed.board)?;
    }
    Ok(parsed.board)
}

/// Serialize a board and replace the storage contents with it
pub fn save_board(storage: &dyn BoardStorage, board: &Board) -> Result<()> {
    storage.write(&codec::serialize(board))
}

/// Stateful owner of one board with persist-on-write semantics
pub struct BoardStore {
    storage: Box<dyn BoardStorage>,
    ids: Box<dyn IdGenerator>,
    board: Board,
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("location", &self.storage.location())
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}

impl BoardStore {
    /// Open the board file at `path` with UUID task ids
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_storage(FileStorage::new(path))
    }

    /// Open a board from any storage backend with UUID task ids
    pub fn with_storage(storage: impl BoardStorage + 'static) -> Result<Self> {
        Self::with_parts(storage, UuidGenerator)
    }

    /// Open a board with explicit storage and id generation
    pub fn with_parts(
        storage: impl BoardStorage + 'static,
        ids: impl IdGenerator + 'static,
    ) -> Result<Self> {
        let board = load_board(&storage, &ids)?;
        debug!(
            location = %storage.location().display(),
            columns = board.len(),
            tasks = board.task_count(),
            "opened board"
        );
        Ok(Self {
            storage: Box::new(storage),
            ids: Box::new(ids),
            board,
        })
    }

    /// The storage location this store writes to
    pub fn location(&self) -> &Path {
        self.storage.location()
    }

    /// The in-memory board. Not refreshed from storage.
    pub fn tasks(&self) -> &Board {
        &self.board
    }

    /// The id generator used for new tasks
    pub fn id_generator(&self) -> &dyn IdGenerator {
        self.ids.as_ref()
    }

    /// Re-read the board from storage, discarding the in-memory copy.
    ///
    /// Uses the same storage and id generator the store was opened with.
    pub fn reload(&mut self) -> Result<()> {
        self.board = load_board(self.storage.as_ref(), self.ids.as_ref())?;
        debug!(location = %self.storage.location().display(), "reloaded board");
        Ok(())
    }

    // =========================================================================
    // Task operations
    // =========================================================================

    /// Append a new task with a fresh id, creating the column if needed.
    ///
    /// A blank column name is rejected with [`KanbanError::InvalidValue`].
    pub fn add_task(
        &mut self,
        column: &str,
        text: impl Into<String>,
        priority: Priority,
        notes: Option<String>,
    ) -> Result<Task> {
        require_column_name(column)?;
        let mut task = Task::new(text)
            .with_id(self.unique_id())
            .with_priority(priority);
        task.set_notes(notes);

        self.board.ensure_column(column).tasks.push(task.clone());
        self.save("add task")?;
        Ok(task)
    }

    /// Insert a task at `index`, creating the column if needed.
    ///
    /// An index past the end appends. The task gets a fresh id if it has none
    /// or if its id is already on this board.
    pub fn insert_task(&mut self, column: &str, index: usize, mut task: Task) -> Result<Task> {
        require_column_name(column)?;
        if task.id.is_unassigned() || self.board.find_task(&task.id).is_some() {
            task.id = self.unique_id();
        }
        let notes = task.notes.take();
        task.set_notes(notes);

        let tasks = &mut self.board.ensure_column(column).tasks;
        let index = index.min(tasks.len());
        tasks.insert(index, task.clone());
        self.save("insert task")?;
        Ok(task)
    }

    /// Remove the task at `index`
    pub fn remove_task(&mut self, column: &str, index: usize) -> Result<Outcome> {
        let Some(tasks) = self
            .board
            .column_mut(column)
            .map(|c| &mut c.tasks)
            .filter(|tasks| index < tasks.len())
        else {
            return Ok(skipped("remove task", column, index));
        };
        tasks.remove(index);
        self.save("remove task")?;
        Ok(Outcome::Applied)
    }

    /// Move a task to another column (or another position in the same one).
    ///
    /// The task is removed from the source first, then inserted at `to_index`
    /// if that is within the target's current length, else appended. For a
    /// downward move within one column the caller must pass the index as it
    /// will be after the removal, i.e. one less.
    pub fn move_task(
        &mut self,
        from_column: &str,
        to_column: &str,
        from_index: usize,
        to_index: Option<usize>,
    ) -> Result<Outcome> {
        if is_blank(to_column) {
            trace!(from_column, from_index, "move task: blank target column");
            return Ok(Outcome::Unchanged);
        }
        let Some(source) = self
            .board
            .column_mut(from_column)
            .map(|c| &mut c.tasks)
            .filter(|tasks| from_index < tasks.len())
        else {
            return Ok(skipped("move task", from_column, from_index));
        };
        let task = source.remove(from_index);

        let target = &mut self.board.ensure_column(to_column).tasks;
        match to_index {
            Some(index) if index <= target.len() => target.insert(index, task),
            _ => target.push(task),
        }
        self.save("move task")?;
        Ok(Outcome::Applied)
    }

    /// Flip the done flag
    pub fn toggle_done(&mut self, column: &str, index: usize) -> Result<Outcome> {
        self.update_task("toggle done", column, index, |task| {
            task.done = !task.done;
            true
        })
    }

    /// Mark a task done
    pub fn set_done(&mut self, column: &str, index: usize) -> Result<Outcome> {
        self.update_task("set done", column, index, |task| {
            task.done = true;
            true
        })
    }

    /// Mark a task not done
    pub fn set_not_done(&mut self, column: &str, index: usize) -> Result<Outcome> {
        self.update_task("set not done", column, index, |task| {
            task.done = false;
            true
        })
    }

    /// Change a task's priority
    pub fn set_task_priority(
        &mut self,
        column: &str,
        index: usize,
        priority: Priority,
    ) -> Result<Outcome> {
        self.update_task("set priority", column, index, |task| {
            task.priority = priority;
            true
        })
    }

    // =========================================================================
    // Comment operations
    // =========================================================================

    /// Append a comment to a task
    pub fn add_task_comment(
        &mut self,
        column: &str,
        index: usize,
        comment: impl Into<String>,
    ) -> Result<Outcome> {
        let comment = comment.into();
        self.update_task("add comment", column, index, |task| {
            task.add_comment(comment);
            true
        })
    }

    /// Replace an existing comment
    pub fn update_task_comment(
        &mut self,
        column: &str,
        index: usize,
        comment_index: usize,
        comment: impl Into<String>,
    ) -> Result<Outcome> {
        let comment = comment.into();
        self.update_task("update comment", column, index, |task| {
            task.update_comment(comment_index, comment)
        })
    }

    /// Remove a comment; removing the last one clears the list
    pub fn remove_task_comment(
        &mut self,
        column: &str,
        index: usize,
        comment_index: usize,
    ) -> Result<Outcome> {
        self.update_task("remove comment", column, index, |task| {
            task.remove_comment(comment_index)
        })
    }

    // =========================================================================
    // Column operations
    // =========================================================================

    /// Append an empty column unless one with this name exists
    pub fn add_column(&mut self, name: &str) -> Result<Outcome> {
        if is_blank(name) {
            trace!("add column: blank name");
            return Ok(Outcome::Unchanged);
        }
        if !self.board.add_column(name) {
            trace!(column = name, "add column: already exists");
            return Ok(Outcome::Unchanged);
        }
        self.save("add column")?;
        Ok(Outcome::Applied)
    }

    /// Delete a column and all of its tasks
    pub fn remove_column(&mut self, name: &str) -> Result<Outcome> {
        if self.board.remove_column(name).is_none() {
            trace!(column = name, "remove column: no such column");
            return Ok(Outcome::Unchanged);
        }
        self.save("remove column")?;
        Ok(Outcome::Applied)
    }

    /// Move a column to `new_index` in display order
    pub fn move_column(&mut self, name: &str, new_index: usize) -> Result<Outcome> {
        if !self.board.move_column(name, new_index) {
            trace!(column = name, new_index, "move column: out of range");
            return Ok(Outcome::Unchanged);
        }
        self.save("move column")?;
        Ok(Outcome::Applied)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Apply `f` to the addressed task; persist if it reports a change
    fn update_task<F>(&mut self, op: &str, column: &str, index: usize, f: F) -> Result<Outcome>
    where
        F: FnOnce(&mut Task) -> bool,
    {
        let Some(task) = self.board.task_mut(column, index) else {
            return Ok(skipped(op, column, index));
        };
        if !f(task) {
            trace!(op, column, index, "nothing to change");
            return Ok(Outcome::Unchanged);
        }
        self.save(op)?;
        Ok(Outcome::Applied)
    }

    /// Generate an id not yet used on this board
    fn unique_id(&self) -> TaskId {
        loop {
            let id = self.ids.generate();
            if self.board.find_task(&id).is_none() {
                return id;
            }
            trace!(%id, "generated id already on the board, retrying");
        }
    }

    fn save(&self, op: &str) -> Result<()> {
        save_board(self.storage.as_ref(), &self.board)?;
        debug!(
            location = %self.storage.location().display(),
            op,
            "board saved"
        );
        Ok(())
    }
}

/// A blank name would be written as an empty heading, which reads back differently
fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

fn require_column_name(name: &str) -> Result<()> {
    if is_blank(name) {
        return Err(KanbanError::invalid_value("column", "name must not be blank"));
    }
    Ok(())
}

fn skipped(op: &str, column: &str, index: usize) -> Outcome {
    trace!(op, column, index, "no task at position");
    Outcome::Unchanged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::storage::MemoryStorage;
    use crate::types::TaskId;

    const EMPTY_BOARD: &str = "## Todo\n\n## In Progress\n\n## Done\n\n";

    fn setup(text: &str) -> (MemoryStorage, BoardStore) {
        let storage = MemoryStorage::new(text);
        let store = BoardStore::with_parts(storage.clone(), SequentialIds::new("t")).unwrap();
        (storage, store)
    }

    fn texts(store: &BoardStore, column: &str) -> Vec<String> {
        store
            .tasks()
            .tasks_in(column)
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn test_open_missing_location_fails() {
        let err = BoardStore::with_storage(MemoryStorage::missing()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_open_writes_back_generated_ids_once() {
        let (storage, store) = setup("## Todo\n- [ ] a\n- [ ] b\n");
        assert_eq!(storage.write_count(), 1);
        assert_eq!(
            storage.content().unwrap(),
            "## Todo\n- [ ] a [id: t-1] [Priority: Medium]\n- [ ] b [id: t-2] [Priority: Medium]\n\n"
        );
        assert_eq!(store.tasks().tasks_in("Todo")[1].id, "t-2");
    }

    #[test]
    fn test_open_with_ids_does_not_write() {
        let (storage, _store) = setup("## Todo\n- [ ] a [id: 1]\n");
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_add_task_then_toggle() {
        let (storage, mut store) = setup(EMPTY_BOARD);

        let task = store
            .add_task("Todo", "write tests", Priority::Medium, None)
            .unwrap();
        assert_eq!(task.id, "t-1");
        assert!(!task.done);
        assert_eq!(store.tasks().tasks_in("Todo"), &[task.clone()]);

        assert!(store.toggle_done("Todo", 0).unwrap().is_applied());
        assert!(store.tasks().tasks_in("Todo")[0].done);
        assert!(storage
            .content()
            .unwrap()
            .contains("- [x] write tests [id: t-1] [Priority: Medium]\n"));
    }

    #[test]
    fn test_add_task_creates_column_and_keeps_notes() {
        let (storage, mut store) = setup(EMPTY_BOARD);
        store
            .add_task("Backlog", "idea", Priority::Low, Some("a\nb".into()))
            .unwrap();
        assert_eq!(
            store.tasks().column_names(),
            vec!["Todo", "In Progress", "Done", "Backlog"]
        );
        assert!(storage
            .content()
            .unwrap()
            .ends_with("## Backlog\n- [ ] idea [id: t-1] [Priority: Low]\n    a\n    b\n\n"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (_storage, mut store) = setup("## Todo\n- [x] a [id: 1]\n");
        store.toggle_done("Todo", 0).unwrap();
        store.toggle_done("Todo", 0).unwrap();
        assert!(store.tasks().tasks_in("Todo")[0].done);
    }

    #[test]
    fn test_set_done_and_not_done() {
        let (_storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n");
        store.set_done("Todo", 0).unwrap();
        assert!(store.tasks().tasks_in("Todo")[0].done);
        store.set_not_done("Todo", 0).unwrap();
        assert!(!store.tasks().tasks_in("Todo")[0].done);
        assert_eq!(store.set_done("Todo", 1).unwrap(), Outcome::Unchanged);
        assert_eq!(store.set_not_done("Nope", 0).unwrap(), Outcome::Unchanged);
    }

    #[test]
    fn test_set_priority() {
        let (storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n");
        store.set_task_priority("Todo", 0, Priority::Highest).unwrap();
        assert!(storage.content().unwrap().contains("[Priority: Highest]"));
        assert_eq!(
            store.set_task_priority("Todo", 3, Priority::Low).unwrap(),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_insert_task() {
        let (_storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n- [ ] b [id: 2]\n");

        let inserted = store.insert_task("Todo", 1, Task::new("mid")).unwrap();
        assert_eq!(inserted.id, "t-1");
        assert_eq!(texts(&store, "Todo"), vec!["a", "mid", "b"]);

        // past the end appends
        store.insert_task("Todo", 99, Task::new("end").with_id("9")).unwrap();
        assert_eq!(texts(&store, "Todo"), vec!["a", "mid", "b", "end"]);

        // new column
        store.insert_task("Later", 0, Task::new("x").with_id("10")).unwrap();
        assert_eq!(texts(&store, "Later"), vec!["x"]);
    }

    #[test]
    fn test_insert_task_replaces_colliding_id() {
        let (_storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n");
        let inserted = store.insert_task("Todo", 0, Task::new("b").with_id("1")).unwrap();
        assert_eq!(inserted.id, "t-1");
    }

    #[test]
    fn test_remove_task() {
        let (storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n- [ ] b [id: 2]\n");
        assert!(store.remove_task("Todo", 0).unwrap().is_applied());
        assert_eq!(texts(&store, "Todo"), vec!["b"]);
        assert_eq!(storage.write_count(), 1);

        assert_eq!(store.remove_task("Todo", 5).unwrap(), Outcome::Unchanged);
        assert_eq!(store.remove_task("Nope", 0).unwrap(), Outcome::Unchanged);
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_move_task_between_columns() {
        let (_storage, mut store) =
            setup("## Todo\n- [ ] a [id: 1] [Comments: c]\n    n\n- [ ] b [id: 2]\n## Done\n- [x] z [id: 3]\n");
        let before = store.tasks().tasks_in("Todo")[0].clone();

        store.move_task("Todo", "Done", 0, Some(0)).unwrap();
        assert_eq!(texts(&store, "Todo"), vec!["b"]);
        assert_eq!(texts(&store, "Done"), vec!["a", "z"]);
        assert_eq!(store.tasks().tasks_in("Done")[0], before);
        assert_eq!(store.tasks().task_count(), 3);
    }

    #[test]
    fn test_move_task_out_of_range_target_appends() {
        let (_storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n## Done\n- [x] z [id: 3]\n");
        store.move_task("Todo", "Done", 0, Some(7)).unwrap();
        assert_eq!(texts(&store, "Done"), vec!["z", "a"]);
    }

    #[test]
    fn test_move_task_creates_target_column() {
        let (_storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n");
        store.move_task("Todo", "Review", 0, None).unwrap();
        assert_eq!(store.tasks().column_names(), vec!["Todo", "Review"]);
        assert_eq!(texts(&store, "Review"), vec!["a"]);
    }

    #[test]
    fn test_move_task_same_column_removes_first() {
        let (_storage, mut store) =
            setup("## Todo\n- [ ] a [id: 1]\n- [ ] b [id: 2]\n- [ ] c [id: 3]\n");
        // dropping `a` below `b`: target index 2 in the original list, 1 after removal
        store.move_task("Todo", "Todo", 0, Some(1)).unwrap();
        assert_eq!(texts(&store, "Todo"), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_move_task_missing_source_is_noop() {
        let (storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n");
        assert_eq!(
            store.move_task("Todo", "Done", 4, None).unwrap(),
            Outcome::Unchanged
        );
        assert_eq!(
            store.move_task("Nope", "Done", 0, None).unwrap(),
            Outcome::Unchanged
        );
        assert!(!store.tasks().has_column("Done"));
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_comments() {
        let (storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n");

        store.add_task_comment("Todo", 0, "First").unwrap();
        store.add_task_comment("Todo", 0, "Second").unwrap();
        store.update_task_comment("Todo", 0, 0, "First!").unwrap();
        assert!(storage
            .content()
            .unwrap()
            .contains("[Comments: First! | Second]"));

        assert_eq!(
            store.update_task_comment("Todo", 0, 2, "x").unwrap(),
            Outcome::Unchanged
        );
        assert_eq!(
            store.remove_task_comment("Todo", 0, 2).unwrap(),
            Outcome::Unchanged
        );
        assert_eq!(
            store.add_task_comment("Todo", 1, "x").unwrap(),
            Outcome::Unchanged
        );

        store.remove_task_comment("Todo", 0, 0).unwrap();
        store.remove_task_comment("Todo", 0, 0).unwrap();
        assert_eq!(store.tasks().tasks_in("Todo")[0].comments(), None);
        assert!(!storage.content().unwrap().contains("Comments"));
    }

    #[test]
    fn test_columns() {
        let (storage, mut store) = setup(EMPTY_BOARD);

        assert_eq!(store.add_column("Todo").unwrap(), Outcome::Unchanged);
        assert_eq!(storage.write_count(), 0);
        store.add_column("Review").unwrap();
        assert_eq!(
            store.tasks().column_names(),
            vec!["Todo", "In Progress", "Done", "Review"]
        );

        store.remove_column("In Progress").unwrap();
        assert_eq!(store.remove_column("In Progress").unwrap(), Outcome::Unchanged);
        assert_eq!(
            storage.content().unwrap(),
            "## Todo\n\n## Done\n\n## Review\n\n"
        );
    }

    #[test]
    fn test_move_column() {
        let (storage, mut store) = setup(
            "## Todo\n- [ ] a [id: 1]\n## In Progress\n- [ ] b [id: 2]\n## Done\n- [x] c [id: 3]\n",
        );
        store.move_column("Done", 0).unwrap();
        assert_eq!(
            store.tasks().column_names(),
            vec!["Done", "Todo", "In Progress"]
        );
        assert_eq!(texts(&store, "Done"), vec!["c"]);
        assert_eq!(texts(&store, "Todo"), vec!["a"]);
        assert!(storage.content().unwrap().starts_with("## Done\n- [x] c"));
    }

    #[test]
    fn test_move_column_noop_leaves_storage_untouched() {
        let (storage, mut store) = setup(EMPTY_BOARD);
        assert_eq!(store.move_column("Nope", 0).unwrap(), Outcome::Unchanged);
        assert_eq!(store.move_column("Todo", 3).unwrap(), Outcome::Unchanged);
        assert_eq!(storage.content().unwrap(), EMPTY_BOARD);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_write_failure_keeps_memory_ahead() {
        let (storage, mut store) = setup(EMPTY_BOARD);
        storage.fail_writes(true);

        let err = store
            .add_task("Todo", "lost on disk", Priority::Medium, None)
            .unwrap_err();
        assert!(err.is_write_failure());
        assert_eq!(texts(&store, "Todo"), vec!["lost on disk"]);
        assert_eq!(storage.content().unwrap(), EMPTY_BOARD);
    }

    #[test]
    fn test_external_edits_are_overwritten() {
        let (storage, mut store) = setup(EMPTY_BOARD);
        storage.set_content("## Elsewhere\n- [ ] edit [id: e]\n");

        assert!(!store.tasks().has_column("Elsewhere"));
        store.add_column("Review").unwrap();
        let content = storage.content().unwrap();
        assert!(!content.contains("Elsewhere"));
        assert!(content.contains("## Review"));

        // a fresh store sees what is on storage now
        let reopened =
            BoardStore::with_parts(storage.clone(), SequentialIds::default()).unwrap();
        assert_eq!(reopened.tasks(), store.tasks());
        assert!(reopened.tasks().find_task(&TaskId::from("e")).is_none());
    }

    #[test]
    fn test_new_ids_skip_ids_already_on_board() {
        let (_storage, mut store) = setup("## Todo\n- [ ] a [id: t-1]\n- [ ] b [id: t-3]\n");
        let added = store.add_task("Todo", "c", Priority::Low, None).unwrap();
        assert_eq!(added.id, "t-2");
        let inserted = store
            .insert_task("Todo", 0, Task::new("d").with_id("t-1"))
            .unwrap();
        assert_eq!(inserted.id, "t-4");
    }

    #[test]
    fn test_blank_column_names_are_refused() {
        let (storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n");

        assert!(!store.add_column("").unwrap().is_applied());
        assert!(!store.add_column("   ").unwrap().is_applied());
        assert!(!store.move_task("Todo", " ", 0, None).unwrap().is_applied());
        let err = store.add_task("", "x", Priority::Medium, None).unwrap_err();
        assert!(matches!(err, KanbanError::InvalidValue { .. }));
        assert!(store.insert_task("  ", 0, Task::new("y")).is_err());

        assert_eq!(store.tasks().column_names(), vec!["Todo"]);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_reload_keeps_storage_and_ids() {
        let (storage, mut store) = setup("## Todo\n- [ ] a [id: 1]\n");
        storage.set_content("## Todo\n- [ ] from outside\n");

        store.reload().unwrap();
        assert_eq!(store.tasks().tasks_in("Todo")[0].id, "t-1");
        assert_eq!(
            storage.content().unwrap(),
            "## Todo\n- [ ] from outside [id: t-1] [Priority: Medium]\n\n"
        );
        let task = store.add_task("Todo", "next", Priority::Medium, None).unwrap();
        assert_eq!(task.id, "t-2");
    }
}
