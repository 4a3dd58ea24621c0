//! Kanban board engine backed by a single Markdown file
//!
//! A board is an ordered list of named columns, each holding an ordered list
//! of tasks. The whole board is stored as one human-editable Markdown
//! checklist, re-read when a [`BoardStore`] is opened and rewritten after every
//! mutation.
//!
//! ## Overview
//!
//! - **One file = one board** - columns are `##` headings, tasks are `- [ ]` items
//! - **Stable ids** - every task carries an `[id: ...]` tag, generated when missing
//! - **Tolerant mutations** - an unknown column or index is a no-op, not an error
//! - **Cross-board transfer** - move a task by id from one board file to another
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use mdkanban::{BoardStore, Priority};
//!
//! # fn example() -> mdkanban::Result<()> {
//! let mut store = BoardStore::open("tasks.md")?;
//! let task = store.add_task("Todo", "Write docs", Priority::High, None)?;
//! store.move_task("Todo", "Done", 0, None)?;
//! println!("{} -> {:?}", task.id, store.tasks().find_task(&task.id));
//! # Ok(())
//! # }
//! ```
//!
//! ## File Format
//!
//! ```text
//! ## Todo
//! - [ ] Write docs [id: 3f2c...] [Priority: High] [Comments: draft first]
//!     indented lines are notes
//!
//! ## Done
//! - [x] Set up repo [id: 9a41...] [Priority: Medium]
//!
//! ```

pub mod codec;
pub mod command;
mod error;
pub mod ids;
pub mod storage;
pub mod store;
pub mod transfer;
pub mod types;

pub use command::{dispatch, BoardCommand, BoardUpdate};
pub use error::{KanbanError, Result};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use storage::{BoardStorage, FileStorage, MemoryStorage};
pub use store::{load_board, save_board, BoardStore};
pub use transfer::{transfer_between_files, transfer_task, TransferRequest};
pub use types::{Board, Column, Outcome, Priority, Task, TaskId};
