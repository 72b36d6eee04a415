//! Shared building blocks for the TUI.

pub mod task;
pub mod text_field;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text_field::TextField;
