//! Board-level types: Board, Column

use super::ids::TaskId;
use super::task::Task;
use serde::Serialize;

/// A named, ordered list of tasks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Add tasks to the column
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Index of the task with the given id
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}

/// The whole board: columns in display order.
///
/// Stored as a sequence rather than a map so that column order survives every
/// read, write and reorder. Column names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column, merging its tasks into an existing column of the same name
    pub fn with_column(mut self, column: Column) -> Self {
        self.ensure_column(&column.name).tasks.extend(column.tasks);
        self
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in display order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Position of a column in display order
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Check whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Find a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Find a column by name, mutably
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Tasks of a column, or an empty slice when the column does not exist
    pub fn tasks_in(&self, name: &str) -> &[Task] {
        self.column(name).map(|c| c.tasks.as_slice()).unwrap_or(&[])
    }

    /// Get the column with the given name, appending it if absent
    pub fn ensure_column(&mut self, name: &str) -> &mut Column {
        let index = match self.column_index(name) {
            Some(index) => index,
            None => {
                self.columns.push(Column::new(name));
                self.columns.len() - 1
            }
        };
        &mut self.columns[index]
    }

    /// Append an empty column. Returns false if the name is taken.
    pub fn add_column(&mut self, name: &str) -> bool {
        if self.has_column(name) {
            return false;
        }
        self.columns.push(Column::new(name));
        true
    }

    /// Remove a column and its tasks
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let index = self.column_index(name)?;
        Some(self.columns.remove(index))
    }

    /// Move a column to `new_index`, shifting the others.
    ///
    /// Returns false, leaving the order untouched, if the column is unknown or
    /// `new_index` is not a valid column position.
    pub fn move_column(&mut self, name: &str, new_index: usize) -> bool {
        let Some(current) = self.column_index(name) else {
            return false;
        };
        if new_index >= self.columns.len() {
            return false;
        }
        let column = self.columns.remove(current);
        self.columns.insert(new_index, column);
        true
    }

    /// Get a task by column name and index
    pub fn task(&self, column: &str, index: usize) -> Option<&Task> {
        self.column(column)?.tasks.get(index)
    }

    /// Get a task by column name and index, mutably
    pub fn task_mut(&mut self, column: &str, index: usize) -> Option<&mut Task> {
        self.column_mut(column)?.tasks.get_mut(index)
    }

    /// Locate a task by id, returning its column name and index
    pub fn find_task(&self, id: &TaskId) -> Option<(&str, usize)> {
        self.columns.iter().find_map(|c| {
            c.position_of(id).map(|index| (c.name.as_str(), index))
        })
    }

    /// Iterate every task in display order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|c| c.tasks.iter())
    }

    /// Total number of tasks on the board
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True if the board has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
