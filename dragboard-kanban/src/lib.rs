//! In-memory kanban board model with drag-and-drop reordering
//!
//! This crate holds the part of the board client that has real ordering
//! logic: the [`BoardStore`] that keeps columns and tasks in display order,
//! and the [`DragController`] that turns drag lifecycle events into moves on
//! that store. It performs no I/O. When a gesture commits, the controller
//! hands every changed entity to a [`PersistenceSink`] supplied by the host.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use dragboard_kanban::{
//!     Board, BoardStore, Column, ColumnId, DragController, DragEvent, EntityRef,
//!     RecordingSink, Task, TaskId,
//! };
//!
//! let mut store = BoardStore::new();
//! store.seed(
//!     Board::new(1, "My Kanban Board"),
//!     vec![Column::new(1, 1, "To Do", 0), Column::new(2, 1, "Done", 1)],
//!     vec![Task::new(10, 1, "Write docs", 0)],
//! );
//!
//! let sink = RecordingSink::new();
//! let mut controller = DragController::new(Arc::new(sink.clone()));
//!
//! let task = EntityRef::Task(TaskId::new(10));
//! let done = EntityRef::Column(ColumnId::new(2));
//! controller.handle(&mut store, DragEvent::Start(task));
//! controller.handle(&mut store, DragEvent::Over(Some(done)));
//! controller.handle(&mut store, DragEvent::End(Some(done)));
//!
//! assert_eq!(store.task(TaskId::new(10)).unwrap().column, ColumnId::new(2));
//! assert_eq!(sink.changes().len(), 1);
//! ```
//!
//! ## Ordering model
//!
//! - Columns render in the order of [`BoardStore::columns`]; `position` is
//!   rewritten from that order when a column drag commits.
//! - Tasks live in one flat sequence. A column shows its tasks in the order
//!   they appear in that sequence.

pub mod drag;
mod error;
pub mod store;
pub mod types;

pub use drag::{
    BoardChange, DragController, DragEvent, DragOutcome, DragState, PersistenceSink, Point,
    PointerSensor, RecordingSink, DEFAULT_ACTIVATION_DISTANCE,
};
pub use error::{KanbanError, Result};
pub use store::{BoardSnapshot, BoardStore};

// Re-export commonly used types
pub use types::{
    ActiveEntity, Board, BoardId, Column, ColumnId, EntityRef, Task, TaskId,
};
