//! Core types for the kanban engine

mod board;
mod ids;
mod outcome;
mod task;

// Re-export all types
pub use board::{Board, Column};
pub use ids::TaskId;
pub use outcome::Outcome;
pub use task::{Priority, Task};
